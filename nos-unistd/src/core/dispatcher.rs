//! System call dispatcher
//!
//! `Unistd` owns the descriptor table and the process table. It is built once
//! at startup, filled in by the registration calls and then handed to
//! whatever layer performs I/O.

use core::ffi::{c_int, c_void};

use crate::error::Result;
use crate::fs::FileTable;
use crate::process::ProcessTable;
use crate::types::{
    FILE_DESCRIPTOR_NUM, FileControlFunctions, KillFn, OffT, PROCESS_ID_NUM, PidT, SsizeT, Stat,
};

/// Descriptor and process tables behind the unistd calls
#[derive(Clone, Copy, Debug, Default)]
pub struct Unistd<const N: usize = FILE_DESCRIPTOR_NUM, const M: usize = PROCESS_ID_NUM> {
    files: FileTable<N>,
    processes: ProcessTable<M>,
}

impl<const N: usize, const M: usize> Unistd<N, M> {
    /// Create a dispatcher with nothing registered
    pub const fn new() -> Self {
        Self {
            files: FileTable::new(),
            processes: ProcessTable::new(),
        }
    }

    pub fn files(&self) -> &FileTable<N> {
        &self.files
    }

    pub fn processes(&self) -> &ProcessTable<M> {
        &self.processes
    }

    /// Register the device functions for a descriptor
    pub fn register_new_file_descriptor(
        &mut self,
        fd: c_int,
        functions: Option<&FileControlFunctions>,
    ) -> Result<()> {
        self.files.register(fd, functions)
    }

    /// Register the signal handler for a process id
    pub fn register_new_process(&mut self, pid: PidT, kill_func: Option<KillFn>) -> Result<()> {
        self.processes.register(pid, kill_func)
    }

    /// Set the id returned by `getpid`
    pub fn set_new_pid(&mut self, pid: PidT) {
        self.processes.set_current(pid);
    }

    pub fn close(&self, fd: c_int) -> c_int {
        self.files.close(fd)
    }

    pub fn fstat(&self, fd: c_int, buf: *mut Stat) -> c_int {
        self.files.fstat(fd, buf)
    }

    pub fn isatty(&self, fd: c_int) -> c_int {
        self.files.isatty(fd)
    }

    pub fn lseek(&self, fd: c_int, offset: OffT, whence: c_int) -> OffT {
        self.files.lseek(fd, offset, whence)
    }

    pub fn read(&self, fd: c_int, buf: *mut c_void, count: usize) -> SsizeT {
        self.files.read(fd, buf, count)
    }

    pub fn write(&self, fd: c_int, buf: *const c_void, count: usize) -> SsizeT {
        self.files.write(fd, buf, count)
    }

    pub fn getpid(&self) -> PidT {
        self.processes.current()
    }

    pub fn kill(&self, pid: PidT, sig: c_int) -> c_int {
        self.processes.kill(pid, sig)
    }
}
