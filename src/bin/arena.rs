use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pahtum::ai::{HeuristicAgent, RandomAgent};
use pahtum::arena::Arena;
use pahtum::config::AppConfig;
use pahtum::game::Player;
use pahtum::logging;

/// Pit the greedy opponent against a random player.
#[derive(Parser)]
#[command(name = "arena", about = "Play the heuristic opponent against a random agent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "pahtum.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override the random agent's seed
    #[arg(long)]
    seed: Option<u64>,

    /// Let the heuristic side open the first game
    #[arg(long)]
    heuristic_first: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_stderr().context("installing logger")?;

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        app_config.arena.num_games = games;
    }
    if let Some(seed) = cli.seed {
        app_config.arena.seed = seed;
    }
    app_config.validate().context("validating config")?;

    let first = if cli.heuristic_first {
        Player::Opponent
    } else {
        Player::Human
    };

    let mut random = RandomAgent::with_seed(app_config.arena.seed);
    let mut heuristic = HeuristicAgent::new();
    let games = app_config.arena.num_games;

    let arena = Arena::new(app_config.arena);
    let metrics = arena.run(&mut random, &mut heuristic, first);

    info!(
        "Finished {} games | heuristic win: {:.1}% | random win: {:.1}% | draw: {:.1}% | avg score {:.1} vs {:.1}",
        metrics.total_games(),
        metrics.win_rate(Player::Opponent, games) * 100.0,
        metrics.win_rate(Player::Human, games) * 100.0,
        metrics.draw_rate(games) * 100.0,
        metrics.average_score(Player::Opponent, games),
        metrics.average_score(Player::Human, games),
    );
    Ok(())
}
