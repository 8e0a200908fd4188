// src/commands/mkdir/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct MkdirCommand;

#[async_trait]
impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        // The whole argument is one name, spaces included.
        let name = ctx.args.trim();
        if name.is_empty() {
            return CommandResult::error("mkdir: missing directory name\n");
        }

        match ctx.fs.make_directory(name) {
            Ok(()) => CommandResult::success(format!("Directory '{}' created.\n", name)),
            Err(e) => CommandResult::fs_error("mkdir", &e),
        }
    }
}
