// src/commands/registry.rs
use std::collections::HashMap;

use super::types::Command;
use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::echo::EchoCommand;
use super::exit_cmd::ExitCommand;
use super::help_cmd::HelpCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::pwd::PwdCommand;
use super::touch::TouchCommand;
use super::whoami_cmd::WhoamiCommand;
use super::write_cmd::WriteCommand;

/// Every builtin, in help-table order. The command set is fixed.
pub static BUILTINS: &[&dyn Command] = &[
    &HelpCommand,
    &ClearCommand,
    &WhoamiCommand,
    &PwdCommand,
    &LsCommand,
    &CdCommand,
    &MkdirCommand,
    &TouchCommand,
    &CatCommand,
    &EchoCommand,
    &WriteCommand,
    &ExitCommand,
];

/// Name lookup over `BUILTINS`, built once when the shell starts.
pub struct CommandRegistry {
    commands: HashMap<&'static str, &'static dyn Command>,
}

impl CommandRegistry {
    pub fn builtin() -> Self {
        Self {
            commands: BUILTINS.iter().map(|cmd| (cmd.name(), *cmd)).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&'static dyn Command> {
        self.commands.get(name).copied()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_registered() {
        let registry = CommandRegistry::builtin();
        let names: Vec<&str> = BUILTINS.iter().map(|cmd| cmd.name()).collect();
        assert_eq!(
            names,
            vec![
                "help", "clear", "whoami", "pwd", "ls", "cd", "mkdir", "touch", "cat", "echo",
                "write", "exit"
            ]
        );
        for name in names {
            assert_eq!(registry.get(name).map(|c| c.name()), Some(name));
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = CommandRegistry::builtin();
        assert!(registry.get("LS").is_none());
        assert!(registry.get("rm").is_none());
        assert!(registry.get("").is_none());
    }
}
