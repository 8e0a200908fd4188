// src/commands/types.rs
use async_trait::async_trait;

use crate::console::Console;
use crate::fs::{FsError, VirtualFs};
use crate::session::Session;
use crate::shell::ShellOptions;

/// Whether the shell keeps reading commands after this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Result of running one command.
///
/// Both streams end up on the terminal; `stderr` carries the error lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub flow: Flow,
}

impl CommandResult {
    pub fn ok() -> Self {
        Self::success(String::new())
    }

    pub fn success(stdout: impl Into<String>) -> Self {
        Self { stdout: stdout.into(), stderr: String::new(), flow: Flow::Continue }
    }

    pub fn error(stderr: impl Into<String>) -> Self {
        Self { stdout: String::new(), stderr: stderr.into(), flow: Flow::Continue }
    }

    pub fn stop(stdout: impl Into<String>) -> Self {
        Self { stdout: stdout.into(), stderr: String::new(), flow: Flow::Stop }
    }

    /// `<command>: <error>` as an error result.
    pub fn fs_error(command: &str, err: &FsError) -> Self {
        Self::error(format!("{}: {}\n", command, err))
    }
}

/// Everything a command may touch while it runs.
pub struct CommandContext<'a> {
    /// Text after the command word, leading whitespace removed.
    pub args: &'a str,
    pub fs: &'a mut VirtualFs,
    pub session: &'a Session,
    /// For commands that read further input themselves.
    pub console: &'a mut dyn Console,
    pub options: &'a ShellOptions,
}

/// A builtin command.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}
