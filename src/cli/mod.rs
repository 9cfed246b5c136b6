//! CLI interface and argument parsing
//!
//! This module handles command-line parsing and top-level mode dispatch.

pub mod app;

// Re-export main types
pub use app::*;
