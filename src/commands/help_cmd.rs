use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct HelpCommand;

const TITLE: &str = "TerminalOS  \u{2013}  Commands";

const ROWS: &[(&str, &str)] = &[
    ("help", "Show this help message"),
    ("clear", "Clear the screen"),
    ("whoami", "Show current username"),
    ("pwd", "Show current directory path"),
    ("ls", "List files and folders"),
    ("cd <dir>", "Change directory"),
    ("cd ..", "Go up one directory"),
    ("mkdir <name>", "Create a new directory"),
    ("touch <name>", "Create a new empty file"),
    ("cat <file>", "Show file contents"),
    ("echo <text>", "Print text to the screen"),
    ("write <file>", "Write text into a file"),
    ("exit", "Shut down TerminalOS"),
];

fn render_table() -> String {
    let usage_width = ROWS.iter().map(|(u, _)| u.len()).max().unwrap_or(0);
    let desc_width = ROWS.iter().map(|(_, d)| d.len()).max().unwrap_or(0);
    let left = "\u{2500}".repeat(usage_width + 2);
    let right = "\u{2500}".repeat(desc_width + 2);
    let inner = usage_width + desc_width + 5;

    let mut out = String::from("\n");
    out.push_str(&format!("\u{250c}{}\u{2510}\n", "\u{2500}".repeat(inner)));
    out.push_str(&format!("\u{2502}{:^inner$}\u{2502}\n", TITLE));
    out.push_str(&format!("\u{251c}{left}\u{252c}{right}\u{2524}\n"));
    for (usage, desc) in ROWS {
        out.push_str(&format!(
            "\u{2502} {:<usage_width$} \u{2502} {:<desc_width$} \u{2502}\n",
            usage, desc
        ));
    }
    out.push_str(&format!("\u{2514}{left}\u{2534}{right}\u{2518}\n"));
    out
}

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str { "help" }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success(render_table())
    }
}
