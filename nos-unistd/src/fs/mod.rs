//! Descriptor table
//!
//! Maps descriptor numbers to the device functions registered for them and
//! forwards `close`, `fstat`, `isatty`, `lseek`, `read` and `write` to those
//! functions.

use core::ffi::{c_int, c_uint, c_void};

use crate::error::{Result, UnistdError};
use crate::logging::{unistd_debug, unistd_trace};
use crate::types::{
    FILE_DESCRIPTOR_NUM, FileControlFunctions, FileOp, OffT, SsizeT, Stat,
};

/// Fixed-size table of per-descriptor device functions
#[derive(Clone, Copy, Debug)]
pub struct FileTable<const N: usize = FILE_DESCRIPTOR_NUM> {
    slots: [FileControlFunctions; N],
}

impl<const N: usize> FileTable<N> {
    /// Create a table with every slot empty
    pub const fn new() -> Self {
        Self {
            slots: [FileControlFunctions::EMPTY; N],
        }
    }

    /// Number of descriptor slots
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Map a descriptor to its slot index.
    ///
    /// The descriptor is compared as unsigned, so negative values wrap and
    /// are rejected along with everything at or above `N`.
    fn index(fd: c_int) -> Result<usize> {
        let ufd = fd as c_uint as usize;
        if ufd >= N {
            return Err(UnistdError::BadDescriptor(fd));
        }
        Ok(ufd)
    }

    /// Register the device functions for `fd`, replacing any previous bundle
    pub fn register(&mut self, fd: c_int, functions: Option<&FileControlFunctions>) -> Result<()> {
        let index = Self::index(fd).inspect_err(|err| {
            unistd_debug!("register_new_file_descriptor rejected: {}", *err);
        })?;
        let Some(functions) = functions else {
            unistd_debug!("register_new_file_descriptor rejected: no functions for {}", fd);
            return Err(UnistdError::MissingFunctions(fd));
        };
        self.slots[index] = *functions;
        Ok(())
    }

    /// Get the bundle registered for `fd`
    pub fn get(&self, fd: c_int) -> Result<&FileControlFunctions> {
        Self::index(fd).map(|index| &self.slots[index])
    }

    /// Check that `fd` can serve `op`
    pub fn lookup(&self, fd: c_int, op: FileOp) -> Result<&FileControlFunctions> {
        let functions = self.get(fd)?;
        if !functions.supports(op) {
            return Err(UnistdError::Unsupported { fd, op });
        }
        Ok(functions)
    }

    fn resolve<F>(&self, fd: c_int, op: FileOp, pick: impl FnOnce(&FileControlFunctions) -> Option<F>) -> Result<F> {
        let functions = self.get(fd)?;
        pick(functions).ok_or(UnistdError::Unsupported { fd, op })
    }

    fn rejected(fd: c_int, op: FileOp, err: UnistdError) -> c_int {
        unistd_trace!("{}({}) failed: {}", op, fd, err);
        op.failure_code()
    }

    /// `close()`: 0 on success, -1 on failure
    pub fn close(&self, fd: c_int) -> c_int {
        match self.resolve(fd, FileOp::Close, |f| f.close_func) {
            Ok(close) => close(fd),
            Err(err) => Self::rejected(fd, FileOp::Close, err),
        }
    }

    /// `fstat()`: 0 on success, -1 on failure
    pub fn fstat(&self, fd: c_int, buf: *mut Stat) -> c_int {
        match self.resolve(fd, FileOp::Fstat, |f| f.fstat_func) {
            Ok(fstat) => fstat(fd, buf),
            Err(err) => Self::rejected(fd, FileOp::Fstat, err),
        }
    }

    /// `isatty()`: whatever the device reports, -1 on failure
    pub fn isatty(&self, fd: c_int) -> c_int {
        match self.resolve(fd, FileOp::Isatty, |f| f.isatty_func) {
            Ok(isatty) => isatty(fd),
            Err(err) => Self::rejected(fd, FileOp::Isatty, err),
        }
    }

    /// `lseek()`: resulting offset, -1 on failure
    pub fn lseek(&self, fd: c_int, offset: OffT, whence: c_int) -> OffT {
        match self.resolve(fd, FileOp::Lseek, |f| f.lseek_func) {
            Ok(lseek) => lseek(fd, offset, whence),
            Err(err) => OffT::from(Self::rejected(fd, FileOp::Lseek, err)),
        }
    }

    /// `read()`: bytes read, 0 on failure
    pub fn read(&self, fd: c_int, buf: *mut c_void, count: usize) -> SsizeT {
        match self.resolve(fd, FileOp::Read, |f| f.read_func) {
            Ok(read) => read(fd, buf, count),
            Err(err) => Self::rejected(fd, FileOp::Read, err) as SsizeT,
        }
    }

    /// `write()`: bytes written, -1 on failure
    pub fn write(&self, fd: c_int, buf: *const c_void, count: usize) -> SsizeT {
        match self.resolve(fd, FileOp::Write, |f| f.write_func) {
            Ok(write) => write(fd, buf, count),
            Err(err) => Self::rejected(fd, FileOp::Write, err) as SsizeT,
        }
    }
}

impl<const N: usize> Default for FileTable<N> {
    fn default() -> Self {
        Self::new()
    }
}
