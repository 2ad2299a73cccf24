//! Command-line interface for tictac.

use clap::Parser;
use std::path::PathBuf;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "tictac.toml";

/// Tic-tac-toe in the terminal, with time travel through the move history
#[derive(Parser, Debug, Clone)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe in the terminal with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Go straight to the board instead of the start screen
    #[arg(long)]
    pub skip_start_screen: bool,

    /// List moves newest first
    #[arg(long)]
    pub descending: bool,
}

impl Default for Cli {
    /// Matches parsing an empty command line.
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG),
            log_file: None,
            skip_start_screen: false,
            descending: false,
        }
    }
}
