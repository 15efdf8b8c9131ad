//! External command execution
//!
//! Desktop integrations shell out to tools like `hyprctl`, `notify-send` and
//! `grim`. They go through [`CommandRunner`] so tests can simulate a missing
//! binary, a failing exit status or garbage output without touching the
//! real system.

use std::io;
use std::process::{Command, Stdio};

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit status was zero
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs an external program to completion
///
/// `Err` means the program could not be started at all (typically
/// `io::ErrorKind::NotFound`). A program that ran and failed is
/// `Ok` with `success == false`.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;
}

/// Runs commands on the host via `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_an_io_error() {
        let result = SystemRunner.run("hyprspa-test-no-such-binary", &[]);
        let err = result.expect_err("binary should not exist");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
