// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod echo;
pub mod exit_cmd;
pub mod help_cmd;
pub mod ls;
pub mod mkdir;
pub mod pwd;
pub mod registry;
pub mod touch;
pub mod types;
pub mod whoami_cmd;
pub mod write_cmd;

#[cfg(test)]
mod test_support;

pub use registry::CommandRegistry;
pub use types::{Command, CommandContext, CommandResult, Flow};
