// src/commands/pwd/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct PwdCommand;

#[async_trait]
impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success(format!("{}\n", ctx.fs.path_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Harness;

    #[tokio::test]
    async fn test_pwd_home() {
        let mut harness = Harness::new("alice");
        let result = harness.run(&PwdCommand, "").await;
        assert_eq!(result.stdout, "/home/alice\n");
    }

    #[tokio::test]
    async fn test_pwd_root() {
        let mut harness = Harness::new("alice");
        harness.fs.change_directory("..").unwrap();
        harness.fs.change_directory("..").unwrap();
        let result = harness.run(&PwdCommand, "").await;
        assert_eq!(result.stdout, "/\n");
    }
}
