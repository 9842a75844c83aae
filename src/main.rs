use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pahtum::config::{AppConfig, OpponentKind};
use pahtum::game::Player;
use pahtum::logging;
use pahtum::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Pahtum against the computer in the terminal.
#[derive(Parser)]
#[command(name = "pahtum", about = "Play Pahtum against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "pahtum.toml")]
    config: PathBuf,

    /// Let the computer move first
    #[arg(long)]
    second: bool,

    /// Computer opponent: heuristic or random
    #[arg(long)]
    opponent: Option<OpponentKind>,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init_file(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if cli.second {
        app_config.game.human_first = false;
    }
    if let Some(kind) = cli.opponent {
        app_config.opponent.kind = kind;
    }
    if cli.seed.is_some() {
        app_config.opponent.seed = cli.seed;
    }

    let first: Player = app_config.game.first_player();
    let mut app = App::new(app_config.opponent.build(), first);

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running game")
}
