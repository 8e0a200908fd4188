use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        // ANSI escape sequence to clear screen and move cursor to top-left
        CommandResult::success("\x1B[2J\x1B[H")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Harness;

    #[tokio::test]
    async fn test_clear_outputs_ansi_sequence() {
        let mut harness = Harness::new("alice");
        let result = harness.run(&ClearCommand, "").await;
        assert_eq!(result.stdout, "\x1B[2J\x1B[H");
    }
}
