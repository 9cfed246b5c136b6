//! Pattern storage
//!
//! This module handles locating the per-user pattern directory and
//! saving, reading, and listing pattern definition files.

pub mod dir;
pub mod persist;
pub mod types;

// Re-export main types
pub use dir::*;
pub use persist::*;
pub use types::*;
