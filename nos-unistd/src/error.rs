//! Error handling for the descriptor and process tables

use core::ffi::c_int;
use core::fmt;

use crate::types::{FileOp, PidT};

/// Why a registration or lookup was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnistdError {
    /// Descriptor is negative or not below the table capacity
    BadDescriptor(c_int),
    /// Descriptor is in range but has no function for this operation
    Unsupported { fd: c_int, op: FileOp },
    /// Registration was given no function bundle
    MissingFunctions(c_int),
    /// Process id is outside the process table
    BadProcessId(PidT),
    /// Resolved process slot has no signal handler
    NoKillHandler(PidT),
}

impl UnistdError {
    /// True for errors caused by an identifier outside its table
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, UnistdError::BadDescriptor(_) | UnistdError::BadProcessId(_))
    }
}

impl fmt::Display for UnistdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnistdError::BadDescriptor(fd) => write!(f, "Bad file descriptor: {}", fd),
            UnistdError::Unsupported { fd, op } => {
                write!(f, "Operation {} not supported on descriptor {}", op, fd)
            }
            UnistdError::MissingFunctions(fd) => {
                write!(f, "No file control functions given for descriptor {}", fd)
            }
            UnistdError::BadProcessId(pid) => write!(f, "Bad process id: {}", pid),
            UnistdError::NoKillHandler(pid) => write!(f, "No kill handler for process {}", pid),
        }
    }
}

impl core::error::Error for UnistdError {}

/// Result type for table operations
pub type Result<T> = core::result::Result<T, UnistdError>;

/// Convert a registration result to the C convention (0 / -1)
pub fn to_status(result: Result<()>) -> c_int {
    match result {
        Ok(()) => crate::types::SUCCESS,
        Err(_) => crate::types::FAILURE,
    }
}
