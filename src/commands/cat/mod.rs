// src/commands/cat/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.args.trim();
        if name.is_empty() {
            return CommandResult::error("cat: missing file name\n");
        }

        match ctx.fs.read_file(name) {
            Ok("") => CommandResult::success("(empty file)\n"),
            Ok(content) => CommandResult::success(format!("{}\n", content)),
            Err(e) => CommandResult::fs_error("cat", &e),
        }
    }
}
