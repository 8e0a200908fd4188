use std::io::IsTerminal;

use clap::{Parser, ValueEnum};
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;
use terminal_os::{Console, EditorConsole, Interrupts, ShellOptions, StdConsole};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    #[default]
    Silent,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "terminal-os")]
#[command(about = "A simulated Unix-like shell over an in-memory filesystem")]
#[command(version)]
struct Cli {
    /// Print the prompt and listings without ANSI colors
    #[arg(long = "no-color")]
    no_color: bool,

    /// Skip the pauses in the boot and shutdown sequences
    #[arg(long = "no-delay")]
    no_delay: bool,

    /// Diagnostic log level, written to stderr (RUST_LOG overrides)
    #[arg(long, value_enum, default_value = "silent")]
    log_level: LogLevel,
}

fn setup_tracing(cli: &Cli) {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    } else if let Some(level) = cli.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

/// Line editing when stdin is a terminal, plain byte reads when it is piped.
fn open_console() -> Box<dyn Console> {
    if !std::io::stdin().is_terminal() {
        return Box::new(StdConsole::stdio());
    }
    match EditorConsole::spawn(Interrupts::listen()) {
        Ok(console) => Box::new(console),
        Err(e) => {
            warn!(error = %e, "line editor unavailable, reading stdin directly");
            Box::new(StdConsole::stdio())
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    setup_tracing(&cli);
    debug!("Parsed CLI arguments: {cli:?}");

    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let options = ShellOptions {
        color: !cli.no_color && !no_color_env,
        animate: !cli.no_delay,
    };

    let mut console = open_console();
    let exit_code = match terminal_os::start(console.as_mut(), options).await {
        Ok(()) => 0,
        Err(e) => {
            error!(error = %e, "shell terminated");
            eprintln!("terminal-os: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}
