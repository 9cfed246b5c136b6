//! Pattern execution
//!
//! This module turns a loaded pattern definition into a concrete external
//! command and runs it (or renders it, in dump mode).

pub mod exec;
pub mod invocation;

// Re-export main types
pub use exec::*;
pub use invocation::*;
