// src/commands/touch/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct TouchCommand;

#[async_trait]
impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.args.trim();
        if name.is_empty() {
            return CommandResult::error("touch: missing file name\n");
        }

        // Unlike POSIX touch, an existing name is an error.
        match ctx.fs.touch_file(name) {
            Ok(()) => CommandResult::success(format!("File '{}' created.\n", name)),
            Err(e) => CommandResult::fs_error("touch", &e),
        }
    }
}
