//! Gf - a pattern manager for grep
//!
//! Gf saves named search patterns (flags plus a regular expression) as JSON
//! files in a per-user directory, and replays them later by delegating to an
//! external search engine such as grep.

// Public modules
pub mod cli;
pub mod error;
pub mod runner;
pub mod store;

// Re-export commonly used types
pub use error::{GfError, Result};

/// Current version of Gf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
