//! CLI command handlers.

mod interactive;
mod resolve;

pub use interactive::run_interactive;
pub use resolve::run_resolve;
