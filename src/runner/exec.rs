//! External process execution
//!
//! This module spawns the search engine with the tool's standard streams
//! attached and reports its exit code.

use crate::error::{RunError, RunResult};
use std::io::{self, IsTerminal};
use std::process::{Command as StdCommand, Stdio};

/// Runs external programs on behalf of the tool
///
/// Injectable so command dispatch can be tested without spawning a real
/// search engine.
pub trait ProcessRunner {
    /// Run a program to completion and return its exit code
    fn run(&self, program: &str, args: &[String]) -> RunResult<i32>;
}

/// Process runner backed by the operating system
///
/// The child inherits stdin, stdout, and stderr directly; nothing is
/// buffered or transformed in between.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> RunResult<i32> {
        let status = StdCommand::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|error| RunError::Spawn {
                program: program.to_string(),
                error,
            })?;

        // A termination by signal has no code; treat it as failure
        Ok(status.code().unwrap_or(1))
    }
}

/// Whether standard input is arriving from a pipe rather than a terminal
///
/// When it is, the search target is omitted and the engine reads stdin.
pub fn stdin_is_piped() -> bool {
    !io::stdin().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_success() {
        let code = SystemRunner.run("true", &[]).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_run_failure_code() {
        let code = SystemRunner.run("false", &[]).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn test_run_propagates_exit_code() {
        let args = vec!["-c".to_string(), "exit 7".to_string()];
        let code = SystemRunner.run("sh", &args).unwrap();
        assert_eq!(code, 7);
    }

    #[test]
    fn test_run_missing_program() {
        let result = SystemRunner.run("definitely-not-a-real-program", &[]);
        assert!(matches!(result, Err(RunError::Spawn { .. })));
    }
}
