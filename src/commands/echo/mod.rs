// src/commands/echo/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct EchoCommand;

#[async_trait]
impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        // No flags, no escapes: the argument text is printed as typed.
        CommandResult::success(format!("{}\n", ctx.args))
    }
}
