//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and writes its result to the given writer.

pub mod completions;
pub mod config;
pub mod list;
pub mod show;
pub mod tags;
pub mod types;

// Re-export execute functions for convenience
pub use completions::execute as completions;
pub use self::config::execute as config;
pub use list::execute as list;
pub use show::execute as show;
pub use tags::execute as tags;
pub use types::execute as types;
