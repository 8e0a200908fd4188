//! Fixture for running a single command in tests.

use crate::commands::{Command, CommandContext, CommandResult};
use crate::console::ScriptedConsole;
use crate::fs::VirtualFs;
use crate::session::Session;
use crate::shell::ShellOptions;

pub struct Harness {
    pub fs: VirtualFs,
    pub session: Session,
    pub console: ScriptedConsole,
    pub options: ShellOptions,
}

impl Harness {
    /// Default layout with `user` logged in and sitting in their home.
    pub fn new(user: &str) -> Self {
        let mut fs = VirtualFs::new();
        fs.ensure_home(user).unwrap();
        Self {
            fs,
            session: Session::new(user).unwrap(),
            console: ScriptedConsole::default(),
            options: ShellOptions::quiet(),
        }
    }

    pub async fn run(&mut self, cmd: &dyn Command, args: &str) -> CommandResult {
        let ctx = CommandContext {
            args,
            fs: &mut self.fs,
            session: &self.session,
            console: &mut self.console,
            options: &self.options,
        };
        cmd.execute(ctx).await
    }
}
