//! Process-wide dispatcher instance
//!
//! The C entry points have no context argument, so they share one `Unistd`
//! kept in a static. It starts empty and lives as long as the program; there
//! is no teardown.

use spin::Mutex;

use super::dispatcher::Unistd;
use crate::error::Result;

/// Global dispatcher
static GLOBAL_SYSTEM: Mutex<Unistd> = Mutex::new(Unistd::new());

/// Get the global dispatcher
pub fn get_system() -> &'static Mutex<Unistd> {
    &GLOBAL_SYSTEM
}

/// Run the startup registration against the global dispatcher.
///
/// `setup` runs with the lock held and must not call the C entry points.
pub fn init_system<F>(setup: F) -> Result<()>
where
    F: FnOnce(&mut Unistd) -> Result<()>,
{
    let mut system = GLOBAL_SYSTEM.lock();
    setup(&mut *system)
}

/// Copy of the global tables.
///
/// Dispatch goes through a copy so the lock is released before a device
/// function or signal handler runs.
pub fn snapshot() -> Unistd {
    *GLOBAL_SYSTEM.lock()
}
