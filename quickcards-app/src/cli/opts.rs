use clap::{Args, Parser, Subcommand};
use quickcards_core::SessionController;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "quickcards", version, about = "QuickCards in-memory flashcards (TUI/console)")]
pub struct Cli {
    /// Seed for deck shuffling (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file (TUI defaults to the app data dir; console logs to stderr)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Launch Terminal UI (default)
    Tui,
    /// Line-oriented session on stdin/stdout
    Console(ConsoleCmd),
}

#[derive(Debug, Args, Clone)]
pub struct ConsoleCmd {
    /// Print the session state as JSON after every command
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn session(&self) -> SessionController {
        match self.seed {
            Some(seed) => SessionController::with_seed(seed),
            None => SessionController::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["quickcards"]).unwrap();
        assert!(cli.cmd.is_none());
        assert!(cli.seed.is_none());
    }

    #[test]
    fn console_with_json_and_seed() {
        let cli = Cli::try_parse_from(["quickcards", "--seed", "9", "console", "--json"]).unwrap();
        assert_eq!(cli.seed, Some(9));
        match cli.cmd {
            Some(Command::Console(c)) => assert!(c.json),
            other => panic!("unexpected {other:?}"),
        }
    }
}
