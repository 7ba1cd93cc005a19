//! C entry points
//!
//! Exports the unistd symbols the C runtime links against, plus the three
//! registration calls the application's startup code uses. Everything goes
//! through the global dispatcher in [`crate::core::registry`].

use core::ffi::{c_int, c_void};

use crate::core::registry::{get_system, snapshot};
use crate::error::to_status;
use crate::types::{FileControlFunctions, KillFn, OffT, PidT, SsizeT, Stat};

/// Register device functions for `fd`. 0 on success, -1 on failure.
#[unsafe(no_mangle)]
pub extern "C" fn register_new_file_descriptor(
    fd: c_int,
    file_control_functions: Option<&FileControlFunctions>,
) -> c_int {
    to_status(get_system().lock().register_new_file_descriptor(fd, file_control_functions))
}

/// Register the signal handler for `new_pid`. 0 on success, -1 on failure.
#[unsafe(no_mangle)]
pub extern "C" fn register_new_process(new_pid: PidT, new_kill_func: Option<KillFn>) -> c_int {
    to_status(get_system().lock().register_new_process(new_pid, new_kill_func))
}

#[unsafe(no_mangle)]
pub extern "C" fn set_new_pid(pid: PidT) {
    get_system().lock().set_new_pid(pid);
}

#[unsafe(no_mangle)]
pub extern "C" fn close(fd: c_int) -> c_int {
    snapshot().close(fd)
}

#[unsafe(no_mangle)]
pub extern "C" fn fstat(fd: c_int, buf: *mut Stat) -> c_int {
    snapshot().fstat(fd, buf)
}

#[unsafe(no_mangle)]
pub extern "C" fn isatty(fd: c_int) -> c_int {
    snapshot().isatty(fd)
}

#[unsafe(no_mangle)]
pub extern "C" fn lseek(fd: c_int, offset: OffT, whence: c_int) -> OffT {
    snapshot().lseek(fd, offset, whence)
}

#[unsafe(no_mangle)]
pub extern "C" fn read(fd: c_int, buf: *mut c_void, count: usize) -> SsizeT {
    snapshot().read(fd, buf, count)
}

#[unsafe(no_mangle)]
pub extern "C" fn write(fd: c_int, buf: *const c_void, count: usize) -> SsizeT {
    snapshot().write(fd, buf, count)
}

#[unsafe(no_mangle)]
pub extern "C" fn getpid() -> PidT {
    get_system().lock().getpid()
}

#[unsafe(no_mangle)]
pub extern "C" fn kill(pid: PidT, sig: c_int) -> c_int {
    snapshot().kill(pid, sig)
}
