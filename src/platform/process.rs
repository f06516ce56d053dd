//! External process invocation.
//!
//! Adapters never call `std::process::Command` directly; they go through a
//! [`ProcessRunner`] so tests can script the output of `playerctl` and `pactl`.

use std::process::Command;

use crate::error::{Result, StatlineError};

/// Runs an external program and returns its stdout.
pub trait ProcessRunner {
    /// Run `program` with `args` and return stdout with trailing newlines removed.
    ///
    /// Spawn failures and non-zero exit codes are errors.
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// Runs programs on the host system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(program).args(args).output()?;

        if !output.status.success() {
            return Err(StatlineError::command_failed(program, output.status));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(trim_newline(&stdout).to_string())
    }
}

/// Strip trailing line terminators, leaving any other whitespace intact.
pub fn trim_newline(text: &str) -> &str {
    text.trim_end_matches(['\n', '\r'])
}
