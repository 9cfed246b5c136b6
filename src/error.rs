//! Error types for Gf

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Gf operations
pub type Result<T> = std::result::Result<T, GfError>;

/// Main error type for Gf
#[derive(Error, Debug)]
pub enum GfError {
    /// Pattern storage errors
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Pattern resolution and invocation errors
    #[error("{0}")]
    Run(#[from] RunError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Pattern store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unable to determine the current user's home directory")]
    UserLookup,

    #[error("Unable to open user's pattern directory: {0}")]
    Directory(String),

    #[error("Pattern name cannot be empty")]
    EmptyName,

    #[error("Pattern cannot be empty")]
    EmptyPattern,

    #[error("Pattern '{0}' already exists")]
    AlreadyExists(String),

    #[error("No such pattern: '{0}'")]
    NotFound(String),

    #[error("Pattern file '{path}' is malformed: {error}")]
    Malformed {
        path: PathBuf,
        error: serde_json::Error,
    },

    #[error("Pattern store I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Pattern resolution and execution errors
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Pattern file '{0}' contains no pattern(s)")]
    NoPatterns(PathBuf),

    #[error("Failed to run '{program}': {error}")]
    Spawn { program: String, error: io::Error },
}

/// Specialized result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Specialized result type for invocation operations
pub type RunResult<T> = std::result::Result<T, RunError>;
