//! tictac: tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tictac_tui::{App, Cli, TuiConfig, init_tracing};
use tracing::{error, info};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load_or_default(&cli.config)?.with_overrides(&cli);

    // Log to file so output never lands on the alternate screen
    init_tracing(config.log_file(), config.log_filter())?;
    info!(config = %cli.config.display(), "Starting tictac");

    let theme = config.parse_theme()?;
    let mut app = App::new(&config, theme);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "Application error");
        eprintln!("Error: {:?}", e);
    }

    info!("tictac shutting down");
    result
}
