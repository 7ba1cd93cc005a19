//! Type definitions shared with the C runtime
//!
//! This module contains the capacity constants, the C type aliases used by
//! the low-level I/O layer and the function table a device registers.

use core::ffi::{c_int, c_long, c_void};
use core::fmt;

use static_assertions::{assert_eq_size, const_assert};

/// Number of descriptor slots in the default file table
pub const FILE_DESCRIPTOR_NUM: usize = 3;
/// Number of process slots in the default process table
pub const PROCESS_ID_NUM: usize = 3;
/// Process id reported by `getpid` before `set_new_pid` is called
pub const DEFAULT_PID: PidT = 1;

/// Returned by the C entry points on failure
pub const FAILURE: c_int = -1;
/// Returned by the C entry points on success
pub const SUCCESS: c_int = 0;

/// `pid_t`
pub type PidT = c_int;
/// `off_t`
pub type OffT = c_long;
/// `ssize_t`
pub type SsizeT = isize;

/// Opaque `struct stat`.
///
/// The layout belongs to the C library; this crate only passes the pointer
/// through to the registered `fstat_func`.
#[repr(C)]
pub struct Stat {
    _private: [u8; 0],
}

pub type CloseFn = extern "C" fn(fd: c_int) -> c_int;
pub type FstatFn = extern "C" fn(fd: c_int, buf: *mut Stat) -> c_int;
pub type IsattyFn = extern "C" fn(fd: c_int) -> c_int;
pub type LseekFn = extern "C" fn(fd: c_int, offset: OffT, whence: c_int) -> OffT;
pub type ReadFn = extern "C" fn(fd: c_int, buf: *mut c_void, count: usize) -> SsizeT;
pub type WriteFn = extern "C" fn(fd: c_int, buf: *const c_void, count: usize) -> SsizeT;
/// Signal delivery for one process id
pub type KillFn = extern "C" fn(pid: PidT, sig: c_int) -> c_int;

/// Device functions registered for one descriptor.
///
/// Any member may be `None`, meaning the operation is not supported on that
/// descriptor. Matches `file_control_functions_t` field for field.
#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct FileControlFunctions {
    pub close_func: Option<CloseFn>,
    pub fstat_func: Option<FstatFn>,
    pub isatty_func: Option<IsattyFn>,
    pub lseek_func: Option<LseekFn>,
    pub read_func: Option<ReadFn>,
    pub write_func: Option<WriteFn>,
}

impl FileControlFunctions {
    /// A slot with nothing registered
    pub const EMPTY: Self = Self {
        close_func: None,
        fstat_func: None,
        isatty_func: None,
        lseek_func: None,
        read_func: None,
        write_func: None,
    };

    /// Check whether `op` has a function in this bundle
    pub fn supports(&self, op: FileOp) -> bool {
        match op {
            FileOp::Close => self.close_func.is_some(),
            FileOp::Fstat => self.fstat_func.is_some(),
            FileOp::Isatty => self.isatty_func.is_some(),
            FileOp::Lseek => self.lseek_func.is_some(),
            FileOp::Read => self.read_func.is_some(),
            FileOp::Write => self.write_func.is_some(),
        }
    }

    /// True when no operation is registered
    pub fn is_empty(&self) -> bool {
        FileOp::ALL.iter().all(|&op| !self.supports(op))
    }
}

impl fmt::Debug for FileControlFunctions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileControlFunctions")
            .field("close", &self.close_func.is_some())
            .field("fstat", &self.fstat_func.is_some())
            .field("isatty", &self.isatty_func.is_some())
            .field("lseek", &self.lseek_func.is_some())
            .field("read", &self.read_func.is_some())
            .field("write", &self.write_func.is_some())
            .finish()
    }
}

/// Descriptor operations that go through the file table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileOp {
    Close,
    Fstat,
    Isatty,
    Lseek,
    Read,
    Write,
}

impl FileOp {
    pub const ALL: [FileOp; 6] = [
        FileOp::Close,
        FileOp::Fstat,
        FileOp::Isatty,
        FileOp::Lseek,
        FileOp::Read,
        FileOp::Write,
    ];

    /// C name of the operation
    pub fn name(self) -> &'static str {
        match self {
            FileOp::Close => "close",
            FileOp::Fstat => "fstat",
            FileOp::Isatty => "isatty",
            FileOp::Lseek => "lseek",
            FileOp::Read => "read",
            FileOp::Write => "write",
        }
    }

    /// Value returned to C when the descriptor cannot serve this operation.
    ///
    /// `read` reports zero bytes, everything else reports -1.
    pub fn failure_code(self) -> c_int {
        match self {
            FileOp::Read => 0,
            _ => FAILURE,
        }
    }
}

impl fmt::Display for FileOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// The C side passes NULL for absent functions and bundles.
assert_eq_size!(Option<CloseFn>, *const c_void);
assert_eq_size!(Option<KillFn>, *const c_void);
assert_eq_size!(Option<&'static FileControlFunctions>, *const c_void);
assert_eq_size!(FileControlFunctions, [*const c_void; 6]);

const_assert!(FILE_DESCRIPTOR_NUM > 0);
const_assert!(PROCESS_ID_NUM > 0);
const_assert!(PROCESS_ID_NUM <= c_int::MAX as usize);
