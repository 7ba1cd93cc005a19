//! Logging support for nos-unistd
//!
//! Logging goes through the `log` crate when the `log` feature is enabled.
//! Without it the macros only mark their arguments as used, so call sites
//! need no `#[cfg]` attributes of their own.

/// Trace-level logging
macro_rules! unistd_trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!($($arg)+);
        #[cfg(not(feature = "log"))]
        { let _ = ($($arg)+); }
    };
}

/// Debug-level logging
macro_rules! unistd_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)+);
        #[cfg(not(feature = "log"))]
        { let _ = ($($arg)+); }
    };
}

pub(crate) use unistd_debug;
pub(crate) use unistd_trace;
