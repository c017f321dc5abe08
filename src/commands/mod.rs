//! CLI command implementations.
//!
//! Each step returns `Ok(true)` on success and `Ok(false)` for a reported
//! precondition failure (the run continues but exits non-zero). Fatal
//! errors bubble up as `Err` and abort the run.

pub mod package;
pub mod update;

pub use package::execute_package;
pub use update::execute_update;
