//! Support library for the fastgnp CLI binary.
//!
//! Re-exports the command pipeline so doctests and integration tests can
//! exercise it without forking a subprocess.

pub mod cli;
pub mod logging;
