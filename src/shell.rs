//! Shell Environment
//!
//! Ties together the session, the filesystem and the builtin commands, and runs
//! the read-dispatch loop.

use thiserror::Error;
use tracing::{debug, info};

use crate::boot;
use crate::commands::{CommandContext, CommandRegistry, Flow};
use crate::console::{Console, ConsoleError};
use crate::fs::{FsError, VirtualFs};
use crate::session::Session;

/// Printed when Ctrl+C arrives while the shell is waiting for input.
pub const INTERRUPT_HINT: &str = "\n  (Tip: type 'exit' to shut down TerminalOS)\n";

/// Options for creating a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    /// ANSI colors in the prompt and in `ls` output.
    pub color: bool,
    /// Cosmetic pauses during boot and shutdown.
    pub animate: bool,
}

impl ShellOptions {
    /// No colors and no pauses.
    pub fn quiet() -> Self {
        Self { color: false, animate: false }
    }
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self { color: true, animate: true }
    }
}

/// Failures that end the shell early. Command errors never end up here.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error("could not prepare home directory: {0}")]
    Home(#[from] FsError),
}

/// Split a raw line into the lower-cased command word and the rest.
///
/// Returns `None` for a blank line. The rest keeps its inner whitespace.
pub fn parse_line(raw_line: &str) -> Option<(String, &str)> {
    let trimmed = raw_line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (command, args) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (trimmed, ""),
    };
    Some((command.to_lowercase(), args))
}

/// The interactive shell.
pub struct Shell {
    fs: VirtualFs,
    session: Session,
    registry: CommandRegistry,
    options: ShellOptions,
}

impl Shell {
    /// Create a shell over the default filesystem, starting in the user's home.
    pub fn new(session: Session, options: ShellOptions) -> Result<Self, FsError> {
        Self::with_fs(session, VirtualFs::new(), options)
    }

    /// Create a shell over `fs`, creating the user's home in it if needed.
    pub fn with_fs(session: Session, mut fs: VirtualFs, options: ShellOptions) -> Result<Self, FsError> {
        fs.ensure_home(session.username())?;
        Ok(Self {
            fs,
            session,
            registry: CommandRegistry::builtin(),
            options,
        })
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Prompt for the current working directory.
    pub fn prompt(&self) -> String {
        self.session.prompt(&self.fs.path_string(), self.options.color)
    }

    /// Run one line of input and report whether to keep going.
    pub async fn handle(&mut self, raw_line: &str, console: &mut dyn Console) -> Result<Flow, ConsoleError> {
        let Some((command, args)) = parse_line(raw_line) else {
            return Ok(Flow::Continue);
        };

        let Some(handler) = self.registry.get(&command) else {
            debug!(command = %command, "unknown command");
            console
                .write(&format!(
                    "TerminalOS: '{}': command not found  (type 'help' for a list of commands)\n",
                    command
                ))
                .await?;
            return Ok(Flow::Continue);
        };

        debug!(command = %command, args_len = args.len(), "dispatching");
        let ctx = CommandContext {
            args,
            fs: &mut self.fs,
            session: &self.session,
            console: &mut *console,
            options: &self.options,
        };
        let result = handler.execute(ctx).await;

        if !result.stdout.is_empty() {
            console.write(&result.stdout).await?;
        }
        if !result.stderr.is_empty() {
            console.write(&result.stderr).await?;
        }
        Ok(result.flow)
    }

    /// Prompt, read and dispatch until `exit` or end of input.
    pub async fn run(&mut self, console: &mut dyn Console) -> Result<(), ShellError> {
        loop {
            match console.read_line(&self.prompt()).await {
                Ok(line) => {
                    if self.handle(&line, console).await? == Flow::Stop {
                        info!("shell stopped");
                        break;
                    }
                }
                Err(ConsoleError::Interrupted) => {
                    debug!("interrupt at prompt");
                    console.write(INTERRUPT_HINT).await?;
                }
                Err(ConsoleError::Eof) => {
                    info!("end of input, shutting down");
                    console.write("\n").await?;
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

/// A whole run: boot, login, home setup, welcome, then the command loop.
///
/// End of input at any point is a normal shutdown.
pub async fn start(console: &mut dyn Console, options: ShellOptions) -> Result<(), ShellError> {
    boot::boot_sequence(console, options.animate).await?;

    let session = match Session::login(console).await {
        Ok(session) => session,
        Err(ConsoleError::Eof) => {
            info!("end of input during login");
            console.write("\n").await?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut shell = Shell::new(session, options)?;
    console.write(&shell.session().welcome_message()).await?;
    shell.run(console).await
}
