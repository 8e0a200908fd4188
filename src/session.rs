//! User Session
//!
//! Holds the logged-in username and renders the prompt. Login is a plain name
//! prompt: no passwords, nothing remembered between runs.

use colored::Colorize;
use tracing::info;

use crate::console::{Console, ConsoleError};

/// Host part of the prompt.
pub const HOSTNAME: &str = "TerminalOS";

/// The active user. Created once by `login` and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    username: String,
}

impl Session {
    /// Build a session from raw input, trimming surrounding whitespace.
    /// Returns `None` if nothing is left.
    pub fn new(username: &str) -> Option<Self> {
        let username = username.trim();
        if username.is_empty() {
            None
        } else {
            Some(Self { username: username.to_string() })
        }
    }

    /// Show the login banner and ask for a username until a non-empty one is given.
    ///
    /// An interrupt just asks again; end of input is returned to the caller.
    pub async fn login(console: &mut dyn Console) -> Result<Self, ConsoleError> {
        console.write(&login_banner()).await?;
        loop {
            match console.read_line("Username: ").await {
                Ok(line) => match Session::new(&line) {
                    Some(session) => {
                        info!(username = %session.username, "session started");
                        return Ok(session);
                    }
                    None => {
                        console
                            .write("  Username cannot be empty. Please try again.\n")
                            .await?
                    }
                },
                Err(ConsoleError::Interrupted) => console.write("\n").await?,
                Err(e) => return Err(e),
            }
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// `<user>@TerminalOS:<path>$ `, with the user/host part green and the path
    /// blue when `color` is set.
    pub fn prompt(&self, path_string: &str, color: bool) -> String {
        let identity = format!("{}@{}", self.username, HOSTNAME);
        if color {
            format!("{}:{}$ ", identity.bright_green(), path_string.bright_blue())
        } else {
            format!("{}:{}$ ", identity, path_string)
        }
    }

    /// Greeting printed once after login.
    pub fn welcome_message(&self) -> String {
        format!(
            "\nWelcome, {}!\nType 'help' to see available commands.\n\n",
            self.username
        )
    }
}

fn login_banner() -> String {
    let rule = "=".repeat(42);
    format!("\n{rule}\n         TerminalOS v1.0  \u{2013}  Login\n{rule}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn test_new_trims_and_rejects_blank() {
        assert_eq!(Session::new("  alice \t").unwrap().username(), "alice");
        assert!(Session::new("").is_none());
        assert!(Session::new("   ").is_none());
    }

    #[test]
    fn test_prompt_plain() {
        let session = Session::new("alice").unwrap();
        assert_eq!(session.prompt("/home/alice", false), "alice@TerminalOS:/home/alice$ ");
        assert_eq!(session.prompt("/", false), "alice@TerminalOS:/$ ");
    }

    #[test]
    fn test_prompt_colored_keeps_text() {
        let session = Session::new("alice").unwrap();
        let prompt = session.prompt("/tmp", true);
        assert!(prompt.contains("alice@TerminalOS"));
        assert!(prompt.contains("/tmp"));
        assert!(prompt.ends_with("$ "));
    }

    #[test]
    fn test_welcome_mentions_user() {
        let session = Session::new("bob").unwrap();
        assert!(session.welcome_message().contains("Welcome, bob!"));
    }

    #[tokio::test]
    async fn test_login_retries_until_non_empty() {
        let mut console = ScriptedConsole::new(["", "   ", " carol "]);
        let session = Session::login(&mut console).await.unwrap();
        assert_eq!(session.username(), "carol");
        assert_eq!(
            console.output().matches("Username cannot be empty").count(),
            2
        );
        assert_eq!(console.output().matches("Username: ").count(), 3);
        assert!(console.output().contains("Login"));
    }

    #[tokio::test]
    async fn test_login_interrupt_reprompts() {
        let mut console = ScriptedConsole::default();
        console.push_interrupt();
        console.push_line("dave");
        let session = Session::login(&mut console).await.unwrap();
        assert_eq!(session.username(), "dave");
    }

    #[tokio::test]
    async fn test_login_eof() {
        let mut console = ScriptedConsole::new([""]);
        let result = Session::login(&mut console).await;
        assert!(matches!(result, Err(ConsoleError::Eof)));
    }
}
