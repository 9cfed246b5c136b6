//! Building the external search command
//!
//! Converts a resolved pattern definition plus a target path into the program
//! name and argument list for the search engine.

use crate::error::{RunError, RunResult};
use crate::store::Pattern;
use std::fmt;
use std::path::Path;

/// Search program used when a definition names no engine
pub const DEFAULT_ENGINE: &str = "grep";

/// A fully assembled external search command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to run
    pub program: String,

    /// Engine flags, split from the definition's flag string
    pub flags: Vec<String>,

    /// The resolved regular expression
    pub pattern: String,

    /// Search target, absent when input arrives on stdin
    pub target: Option<String>,
}

/// Assemble an invocation from a definition and a target
///
/// `source` is the file the definition came from, used in diagnostics when
/// the definition holds no pattern. When `piped` is set the target is dropped
/// entirely and the engine is expected to read stdin; otherwise a missing
/// target defaults to the current directory.
///
/// Flag splitting is plain whitespace tokenization. Flag values containing
/// embedded spaces cannot be expressed; there is no quoting support.
pub fn build_invocation(
    def: &Pattern,
    source: &Path,
    target: Option<&str>,
    piped: bool,
) -> RunResult<Invocation> {
    let pattern = def
        .effective_pattern()
        .ok_or_else(|| RunError::NoPatterns(source.to_path_buf()))?;

    let program = if def.engine.is_empty() {
        DEFAULT_ENGINE.to_string()
    } else {
        def.engine.clone()
    };

    let flags = def.flags.split_whitespace().map(str::to_string).collect();

    let target = if piped {
        None
    } else {
        Some(target.unwrap_or(".").to_string())
    };

    Ok(Invocation {
        program,
        flags,
        pattern,
        target,
    })
}

impl Invocation {
    /// The argument list to pass to the program
    pub fn args(&self) -> Vec<String> {
        let mut args = self.flags.clone();
        args.push(self.pattern.clone());
        if let Some(target) = &self.target {
            args.push(target.clone());
        }
        args
    }
}

impl fmt::Display for Invocation {
    /// Render the command line for dump mode
    ///
    /// The pattern is shown with quoted-string rendering for readability;
    /// this is not shell escaping.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for flag in &self.flags {
            write!(f, " {}", flag)?;
        }
        write!(f, " {:?}", self.pattern)?;
        if let Some(target) = &self.target {
            write!(f, " {}", target)?;
        }
        Ok(())
    }
}
