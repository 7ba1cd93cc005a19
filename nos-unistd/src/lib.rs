//! NOS unistd
//!
//! This crate provides the low-level unistd calls (`close`, `fstat`,
//! `isatty`, `lseek`, `read`, `write`, `getpid`, `kill`) for a freestanding
//! target with no operating system underneath. The calls are table driven:
//! the application registers device functions per descriptor and a signal
//! handler per process id at startup, and each call forwards to whatever is
//! registered for the identifier it is given.
//!
//! # Architecture
//!
//! - **FS**: descriptor table and the six descriptor calls
//! - **Process**: process table, `getpid` and `kill`
//! - **Core**: the `Unistd` object owning both tables, and the global instance
//! - **Posix**: `#[no_mangle]` C symbols (feature `posix_layer`)
//!
//! # Usage
//!
//! ```rust
//! use core::ffi::{c_int, c_void};
//! use nos_unistd::{FileControlFunctions, SsizeT, Unistd};
//!
//! extern "C" fn uart_write(_fd: c_int, _buf: *const c_void, count: usize) -> SsizeT {
//!     count as SsizeT
//! }
//!
//! let mut unistd: Unistd = Unistd::new();
//! let uart = FileControlFunctions {
//!     write_func: Some(uart_write),
//!     ..FileControlFunctions::EMPTY
//! };
//! unistd.register_new_file_descriptor(1, Some(&uart)).unwrap();
//!
//! let msg = b"hello";
//! assert_eq!(unistd.write(1, msg.as_ptr().cast(), msg.len()), 5);
//! assert_eq!(unistd.close(1), -1);
//! ```

#![no_std]
#![allow(dead_code)]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod logging;

pub mod core;
pub mod error;
pub mod fs;
pub mod process;
pub mod types;

#[cfg(feature = "posix_layer")]
pub mod posix;

pub use crate::core::{Unistd, get_system, init_system, snapshot};
pub use error::{Result, UnistdError};
pub use fs::FileTable;
pub use process::ProcessTable;
pub use types::*;
