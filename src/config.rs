use std::path::Path;

use crate::ai::{Agent, RandomAgent};
use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub opponent: OpponentConfig,
    pub arena: ArenaConfig,
}

/// Interactive game settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// The human places the first mark.
    pub human_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { human_first: true }
    }
}

impl GameConfig {
    pub fn first_player(&self) -> Player {
        if self.human_first {
            Player::Human
        } else {
            Player::Opponent
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    Heuristic,
    Random,
}

impl std::str::FromStr for OpponentKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heuristic" => Ok(OpponentKind::Heuristic),
            "random" => Ok(OpponentKind::Random),
            other => Err(ConfigError::Validation(format!(
                "unknown opponent '{other}' (expected 'heuristic' or 'random')"
            ))),
        }
    }
}

/// Which agent plays the computer side in the terminal game.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    pub kind: OpponentKind,
    /// Seed for the random opponent; OS entropy when unset.
    pub seed: Option<u64>,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        OpponentConfig {
            kind: OpponentKind::Heuristic,
            seed: None,
        }
    }
}

impl OpponentConfig {
    /// Agent for the computer side. `None` means the built-in heuristic,
    /// played through [`crate::game::GameState::opponent_turn`].
    pub fn build(&self) -> Option<Box<dyn Agent>> {
        match (self.kind, self.seed) {
            (OpponentKind::Heuristic, _) => None,
            (OpponentKind::Random, Some(seed)) => Some(Box::new(RandomAgent::with_seed(seed))),
            (OpponentKind::Random, None) => Some(Box::new(RandomAgent::new())),
        }
    }
}

/// Headless heuristic-vs-random series.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub num_games: usize,
    pub log_interval: usize,
    /// Swap who moves first every game.
    pub alternate_first: bool,
    pub seed: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            num_games: 100,
            log_interval: 10,
            alternate_first: true,
            seed: 0,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena.num_games == 0 {
            return Err(ConfigError::Validation(
                "arena.num_games must be > 0".into(),
            ));
        }
        if self.arena.log_interval == 0 {
            return Err(ConfigError::Validation(
                "arena.log_interval must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
