//! Boot and shutdown sequences. Purely cosmetic.

use std::time::Duration;

use crate::console::{Console, ConsoleError};

const BANNER: &str = r"
  _______                  _             _  ____   _____
 |__   __|                (_)           | |/ __ \ / ____|
    | | ___ _ __ _ __ ___  _ _ __   __ _| | |  | | (___
    | |/ _ \ '__| '_ ` _ \| | '_ \ / _` | | |  | |\___ \
    | |  __/ |  | | | | | | | | | | (_| | | |__| |____) |
    |_|\___|_|  |_| |_| |_|_|_| |_|\__,_|_|\____/|_____/
";

const BOOT_STEPS: &[(&str, u64)] = &[
    ("Booting TerminalOS v1.0 ...", 450),
    ("Loading system files ...   ", 500),
    ("Mounting virtual drives ...", 400),
    ("Starting services ...      ", 450),
    ("System ready.              ", 300),
];

const SHUTDOWN_STEPS: &[(&str, u64)] = &[
    ("\nShutting down TerminalOS...\n", 600),
    ("All processes stopped.\n", 300),
    ("Goodbye!\n\n", 0),
];

async fn pause(animate: bool, millis: u64) {
    if animate && millis > 0 {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }
}

/// Print the banner and the `[ OK ]` boot steps.
pub async fn boot_sequence(console: &mut dyn Console, animate: bool) -> Result<(), ConsoleError> {
    let rule = "=".repeat(50);
    console.write(BANNER).await?;
    console.write(&format!("{rule}\n")).await?;
    for (message, delay) in BOOT_STEPS {
        console.write(&format!("  [ OK ]  {message}\n")).await?;
        pause(animate, *delay).await;
    }
    console.write(&format!("{rule}\n")).await
}

/// Print the goodbye lines shown by `exit`.
pub async fn shutdown_sequence(console: &mut dyn Console, animate: bool) -> Result<(), ConsoleError> {
    for (message, delay) in SHUTDOWN_STEPS {
        console.write(message).await?;
        pause(animate, *delay).await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[tokio::test]
    async fn test_boot_lists_every_step() {
        let mut console = ScriptedConsole::default();
        boot_sequence(&mut console, false).await.unwrap();
        assert_eq!(console.output().matches("[ OK ]").count(), BOOT_STEPS.len());
        assert!(console.output().contains("System ready."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_waits_when_animated() {
        let mut console = ScriptedConsole::default();
        let started = tokio::time::Instant::now();
        shutdown_sequence(&mut console, true).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(900));
        assert!(console.output().ends_with("Goodbye!\n\n"));
    }
}
