//! Process table
//!
//! Holds one signal handler per process id and the id `getpid` reports.
//! `kill` looks the target up here and forwards to the registered handler.

use core::ffi::c_int;

use crate::error::{Result, UnistdError};
use crate::logging::{unistd_debug, unistd_trace};
use crate::types::{DEFAULT_PID, FAILURE, KillFn, PROCESS_ID_NUM, PidT};

/// Fixed-size table of per-process signal handlers
#[derive(Clone, Copy, Debug)]
pub struct ProcessTable<const M: usize = PROCESS_ID_NUM> {
    handlers: [Option<KillFn>; M],
    current: PidT,
}

impl<const M: usize> ProcessTable<M> {
    /// Create a table with no handlers and the current id set to 1
    pub const fn new() -> Self {
        Self {
            handlers: [None; M],
            current: DEFAULT_PID,
        }
    }

    /// Number of process slots
    pub const fn capacity(&self) -> usize {
        M
    }

    fn index(pid: PidT) -> Result<usize> {
        match usize::try_from(pid) {
            Ok(index) if index < M => Ok(index),
            _ => Err(UnistdError::BadProcessId(pid)),
        }
    }

    /// Register the signal handler for `pid`.
    ///
    /// `None` is accepted and leaves the slot without a handler.
    pub fn register(&mut self, pid: PidT, handler: Option<KillFn>) -> Result<()> {
        let index = Self::index(pid).inspect_err(|err| {
            unistd_debug!("register_new_process rejected: {}", *err);
        })?;
        self.handlers[index] = handler;
        Ok(())
    }

    /// Set the id reported by `getpid`. Not validated.
    pub fn set_current(&mut self, pid: PidT) {
        self.current = pid;
    }

    /// Current process id
    pub const fn current(&self) -> PidT {
        self.current
    }

    /// Find the handler `kill(pid, ..)` would call.
    ///
    /// Non-positive ids are looked up through the current id instead.
    pub fn resolve(&self, pid: PidT) -> Result<KillFn> {
        if pid >= 0 && pid as usize >= M {
            return Err(UnistdError::BadProcessId(pid));
        }
        let target = if pid <= 0 { self.current } else { pid };
        let index = Self::index(target)?;
        self.handlers[index].ok_or(UnistdError::NoKillHandler(target))
    }

    /// `kill()`.
    ///
    /// The handler receives `pid` exactly as passed, even when the lookup
    /// went through the current id.
    pub fn kill(&self, pid: PidT, sig: c_int) -> c_int {
        match self.resolve(pid) {
            Ok(handler) => handler(pid, sig),
            Err(err) => {
                unistd_trace!("kill({}, {}) failed: {}", pid, sig, err);
                FAILURE
            }
        }
    }
}

impl<const M: usize> Default for ProcessTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    std::thread_local! {
        static DELIVERED: Cell<Option<(PidT, c_int)>> = const { Cell::new(None) };
    }

    extern "C" fn kill_record(pid: PidT, sig: c_int) -> c_int {
        DELIVERED.with(|d| d.set(Some((pid, sig))));
        0
    }

    fn delivered() -> Option<(PidT, c_int)> {
        DELIVERED.with(|d| d.take())
    }

    #[test]
    fn test_default_current() {
        let table: ProcessTable = ProcessTable::new();
        assert_eq!(table.current(), 1);
        assert_eq!(table.capacity(), 3);
    }

    #[test]
    fn test_set_current_is_unchecked() {
        let mut table: ProcessTable = ProcessTable::new();
        table.set_current(42);
        assert_eq!(table.current(), 42);
        table.set_current(-5);
        assert_eq!(table.current(), -5);
    }

    #[test]
    fn test_register_bounds() {
        let mut table: ProcessTable = ProcessTable::new();
        assert!(table.register(0, Some(kill_record)).is_ok());
        assert!(table.register(2, Some(kill_record)).is_ok());
        assert_eq!(table.register(3, Some(kill_record)), Err(UnistdError::BadProcessId(3)));
        assert_eq!(table.register(-1, Some(kill_record)), Err(UnistdError::BadProcessId(-1)));
    }

    #[test]
    fn test_register_none_handler() {
        delivered();
        let mut table: ProcessTable = ProcessTable::new();
        table.register(1, Some(kill_record)).unwrap();
        assert!(table.register(1, None).is_ok());
        assert_eq!(table.kill(1, 9), -1);
        assert_eq!(delivered(), None);
    }

    #[test]
    fn test_kill_passes_original_pid() {
        let mut table: ProcessTable = ProcessTable::new();
        table.register(2, Some(kill_record)).unwrap();
        table.set_current(2);

        assert_eq!(table.kill(0, 9), 0);
        assert_eq!(delivered(), Some((0, 9)));

        assert_eq!(table.kill(-1, 15), 0);
        assert_eq!(delivered(), Some((-1, 15)));

        assert_eq!(table.kill(2, 9), 0);
        assert_eq!(delivered(), Some((2, 9)));
    }

    #[test]
    fn test_kill_out_of_range() {
        delivered();
        let mut table: ProcessTable = ProcessTable::new();
        for pid in 0..3 {
            table.register(pid, Some(kill_record)).unwrap();
        }
        assert_eq!(table.kill(3, 9), -1);
        assert_eq!(table.kill(PidT::MAX, 9), -1);
        assert_eq!(delivered(), None);
    }

    #[test]
    fn test_kill_through_bad_current() {
        delivered();
        let mut table: ProcessTable = ProcessTable::new();
        table.register(1, Some(kill_record)).unwrap();

        table.set_current(3);
        assert_eq!(table.resolve(0).err(), Some(UnistdError::BadProcessId(3)));
        assert_eq!(table.kill(0, 9), -1);

        table.set_current(-2);
        assert_eq!(table.kill(-1, 9), -1);
        assert_eq!(delivered(), None);

        // Positive ids do not depend on the current id.
        assert_eq!(table.kill(1, 9), 0);
        assert_eq!(delivered(), Some((1, 9)));
    }

    #[test]
    fn test_kill_current_zero_uses_slot_zero() {
        let mut table: ProcessTable = ProcessTable::new();
        table.register(0, Some(kill_record)).unwrap();
        table.set_current(0);
        assert_eq!(table.kill(0, 2), 0);
        assert_eq!(delivered(), Some((0, 2)));
    }
}
