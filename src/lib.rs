//! terminal-os - A simulated Unix-like shell over an in-memory filesystem
//!
//! The filesystem, the login session and the command dispatcher live here; the
//! binary only wires them to the real terminal.

pub mod boot;
pub mod commands;
pub mod console;
pub mod fs;
pub mod session;
pub mod shell;

pub use console::{Console, ConsoleError, EditorConsole, Interrupts, ScriptedConsole, StdConsole, StreamConsole};
pub use fs::{FsError, Node, VirtualFs};
pub use session::Session;
pub use shell::{start, Shell, ShellError, ShellOptions};
