// src/commands/ls/mod.rs
use async_trait::async_trait;
use colored::Colorize;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::Listing;

pub struct LsCommand;

/// Directories first with a trailing `/`, then files; two-space indent.
fn format_listing(listing: &Listing, color: bool) -> String {
    if listing.is_empty() {
        return "  (empty directory)\n".to_string();
    }

    let mut out = String::new();
    for name in &listing.directories {
        let entry = format!("{}/", name);
        if color {
            out.push_str(&format!("  {}\n", entry.bright_blue()));
        } else {
            out.push_str(&format!("  {}\n", entry));
        }
    }
    for name in &listing.files {
        out.push_str(&format!("  {}\n", name));
    }
    out
}

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        match ctx.fs.list_directory() {
            Ok(listing) => CommandResult::success(format_listing(&listing, ctx.options.color)),
            Err(e) => CommandResult::fs_error("ls", &e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Harness;

    #[tokio::test]
    async fn test_ls_home() {
        let mut harness = Harness::new("alice");
        let result = harness.run(&LsCommand, "").await;
        assert_eq!(result.stdout, "  projects/\n  notes.txt\n");
    }

    #[tokio::test]
    async fn test_ls_sorted_dirs_before_files() {
        let mut harness = Harness::new("alice");
        harness.fs.touch_file("a.txt").unwrap();
        harness.fs.make_directory("zoo").unwrap();
        harness.fs.make_directory("notes_dir").unwrap();

        let result = harness.run(&LsCommand, "").await;
        assert_eq!(
            result.stdout,
            "  notes_dir/\n  projects/\n  zoo/\n  a.txt\n  notes.txt\n"
        );
    }

    #[tokio::test]
    async fn test_ls_each_name_once() {
        let mut harness = Harness::new("alice");
        for name in ["d1", "d2", "d3"] {
            harness.fs.make_directory(name).unwrap();
            harness.fs.touch_file(&format!("{name}.txt")).unwrap();
        }
        let result = harness.run(&LsCommand, "").await;
        for name in ["d1/", "d2/", "d3/", "d1.txt", "d2.txt", "d3.txt"] {
            let line = format!("  {name}");
            assert_eq!(result.stdout.lines().filter(|l| *l == line).count(), 1);
        }
    }

    #[tokio::test]
    async fn test_ls_empty_directory() {
        let mut harness = Harness::new("alice");
        harness.fs.change_directory("projects").unwrap();
        let result = harness.run(&LsCommand, "").await;
        assert_eq!(result.stdout, "  (empty directory)\n");
    }

    #[test]
    fn test_format_listing_colored_keeps_names() {
        let listing = Listing {
            directories: vec!["src".into()],
            files: vec!["main.rs".into()],
        };
        let out = format_listing(&listing, true);
        assert!(out.contains("src/"));
        assert!(out.ends_with("  main.rs\n"));
    }
}
