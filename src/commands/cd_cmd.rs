//! cd - Change directory builtin
//!
//! Supports:
//! - cd - return to the user's home directory
//! - cd .. - go up one level
//! - cd name - enter a child directory of the working directory

use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let target = ctx.args.trim();
        let moved = if target.is_empty() {
            ctx.fs.enter_home(ctx.session.username())
        } else {
            ctx.fs.change_directory(target)
        };

        match moved {
            Ok(()) => CommandResult::ok(),
            Err(e) => CommandResult::fs_error("cd", &e),
        }
    }
}
