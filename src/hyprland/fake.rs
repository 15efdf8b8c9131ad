//! Scripted `CommandRunner` for tests

use super::runner::CommandOutput;
use super::CommandRunner;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

impl CommandOutput {
    fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

enum Reply {
    Stdout(String),
    Fail(String),
    Missing,
}

/// Replies to exact command lines ("program arg arg") and records every call.
/// Unscripted commands behave like a missing binary unless `accept_all` is set.
#[derive(Default)]
pub struct FakeRunner {
    replies: HashMap<String, Reply>,
    accept_all: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, command: &str, stdout: &str) -> Self {
        self.replies
            .insert(command.to_string(), Reply::Stdout(stdout.to_string()));
        self
    }

    pub fn fail(mut self, command: &str, stderr: &str) -> Self {
        self.replies
            .insert(command.to_string(), Reply::Fail(stderr.to_string()));
        self
    }

    pub fn missing(mut self, command: &str) -> Self {
        self.replies.insert(command.to_string(), Reply::Missing);
        self
    }

    pub fn accept_all(mut self) -> Self {
        self.accept_all = true;
        self
    }

    /// Shared handle to the call log, usable after the runner is moved
    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        self.calls.clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        let line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.lock().unwrap().push(line.clone());

        match self.replies.get(&line) {
            Some(Reply::Stdout(out)) => Ok(CommandOutput::ok(out.clone())),
            Some(Reply::Fail(err)) => Ok(CommandOutput::failed(err.clone())),
            Some(Reply::Missing) => Err(io::Error::new(io::ErrorKind::NotFound, "not found")),
            None if self.accept_all => Ok(CommandOutput::ok("ok")),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("unscripted command: {}", line),
            )),
        }
    }
}
