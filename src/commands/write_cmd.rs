//! write - Capture typed lines into a file
//!
//! Lines are read until an empty one; the captured lines, joined with `\n`,
//! replace the file's content in full.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::commands::{Command, CommandContext, CommandResult};
use crate::console::{Console, ConsoleError};
use crate::shell::INTERRUPT_HINT;

pub struct WriteCommand;

/// Read lines until a blank one. The blank line itself is not captured.
async fn capture_lines(console: &mut dyn Console) -> Result<Vec<String>, ConsoleError> {
    let mut lines = Vec::new();
    loop {
        let line = console.read_line("").await?;
        if line.is_empty() {
            return Ok(lines);
        }
        lines.push(line);
    }
}

#[async_trait]
impl Command for WriteCommand {
    fn name(&self) -> &'static str {
        "write"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.args.trim();
        if name.is_empty() {
            return CommandResult::error("write: missing file name\n");
        }

        let intro = format!(
            "Writing to '{}'. Enter your text below.\n\
             (Leave a blank line and press Enter to save and finish.)\n\n",
            name
        );
        if let Err(e) = ctx.console.write(&intro).await {
            return CommandResult::error(format!("write: {}\n", e));
        }

        let lines = match capture_lines(ctx.console).await {
            Ok(lines) => lines,
            Err(ConsoleError::Interrupted) => {
                debug!(name, "write interrupted, nothing saved");
                return CommandResult::success(INTERRUPT_HINT);
            }
            Err(ConsoleError::Eof) => {
                debug!(name, "input closed during write, nothing saved");
                return CommandResult::stop("\n");
            }
            Err(e) => {
                warn!(name, error = %e, "write capture failed");
                return CommandResult::error(format!("write: {}\n", e));
            }
        };

        match ctx.fs.write_file(name, lines.join("\n")) {
            Ok(()) => CommandResult::success(format!("Saved to '{}'.\n", name)),
            Err(e) => CommandResult::fs_error("write", &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Flow;
    use crate::commands::test_support::Harness;

    #[tokio::test]
    async fn test_write_round_trip() {
        let mut harness = Harness::new("alice");
        harness.fs.touch_file("greeting.txt").unwrap();
        for line in ["hi", "there", ""] {
            harness.console.push_line(line);
        }

        let result = harness.run(&WriteCommand, "greeting.txt").await;
        assert_eq!(result.stdout, "Saved to 'greeting.txt'.\n");
        assert_eq!(harness.fs.read_file("greeting.txt").unwrap(), "hi\nthere");
        assert!(harness.console.output().contains("Writing to 'greeting.txt'"));
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let mut harness = Harness::new("alice");
        for line in ["first", "", "second", ""] {
            harness.console.push_line(line);
        }
        harness.run(&WriteCommand, "f.txt").await;
        harness.run(&WriteCommand, "f.txt").await;
        assert_eq!(harness.fs.read_file("f.txt").unwrap(), "second");
    }

    #[tokio::test]
    async fn test_write_zero_lines_gives_empty_content() {
        let mut harness = Harness::new("alice");
        harness.console.push_line("");
        harness.run(&WriteCommand, "notes.txt").await;
        assert_eq!(harness.fs.read_file("notes.txt").unwrap(), "");
    }

    #[tokio::test]
    async fn test_write_keeps_line_whitespace() {
        let mut harness = Harness::new("alice");
        for line in ["  indented", "tail  ", ""] {
            harness.console.push_line(line);
        }
        harness.run(&WriteCommand, "ws.txt").await;
        assert_eq!(harness.fs.read_file("ws.txt").unwrap(), "  indented\ntail  ");
    }

    #[tokio::test]
    async fn test_write_into_directory() {
        let mut harness = Harness::new("alice");
        for line in ["data", ""] {
            harness.console.push_line(line);
        }
        let result = harness.run(&WriteCommand, "projects").await;
        assert_eq!(result.stderr, "write: projects: Is a directory\n");
        assert!(harness.fs.resolve(&["home", "alice", "projects"]).unwrap().is_directory());
    }

    #[tokio::test]
    async fn test_write_missing_name_reads_nothing() {
        let mut harness = Harness::new("alice");
        harness.console.push_line("should stay queued");
        let result = harness.run(&WriteCommand, "").await;
        assert_eq!(result.stderr, "write: missing file name\n");
        assert_eq!(harness.console.remaining(), 1);
    }

    #[tokio::test]
    async fn test_write_interrupt_saves_nothing() {
        let mut harness = Harness::new("alice");
        harness.console.push_line("partial");
        harness.console.push_interrupt();
        let result = harness.run(&WriteCommand, "draft.txt").await;
        assert_eq!(result.stdout, INTERRUPT_HINT);
        assert_eq!(result.flow, Flow::Continue);
        assert!(harness.fs.read_file("draft.txt").is_err());
    }

    #[tokio::test]
    async fn test_write_eof_stops_without_saving() {
        let mut harness = Harness::new("alice");
        harness.console.push_line("partial");
        let result = harness.run(&WriteCommand, "draft.txt").await;
        assert_eq!(result.flow, Flow::Stop);
        assert!(harness.fs.read_file("draft.txt").is_err());
    }
}
