//! CLI command handlers.

mod remove;
mod set;

pub use remove::run_remove;
pub use set::run_set;
