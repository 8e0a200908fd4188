//! exit - Shut down the shell

use async_trait::async_trait;
use tracing::warn;

use crate::boot::shutdown_sequence;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct ExitCommand;

#[async_trait]
impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    /// Always stops the shell; any argument text is ignored.
    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if let Err(e) = shutdown_sequence(ctx.console, ctx.options.animate).await {
            warn!(error = %e, "failed to print shutdown sequence");
        }
        CommandResult::stop(String::new())
    }
}
