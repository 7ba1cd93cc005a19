//! Core dispatch functionality
//!
//! This module provides the `Unistd` object that owns both tables, and the
//! process-wide instance the C entry points use.

pub mod dispatcher;
pub mod registry;

pub use dispatcher::Unistd;
pub use registry::{get_system, init_system, snapshot};
