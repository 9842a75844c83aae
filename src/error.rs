use std::path::PathBuf;

/// Errors from placing a mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is outside the 7x7 board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
}

/// Errors from advancing a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("game is over")]
    GameOver,

    #[error("it is not the opponent's turn")]
    NotOpponentsTurn,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors from installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to create log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to install log subscriber: {0}")]
    Init(String),
}
