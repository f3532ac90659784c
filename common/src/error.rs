use std::path::PathBuf;

use crate::games::tictactoe::Position;

/// Reasons the engine refuses a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell {}:{} is already occupied", .0.x, .0.y)]
    OccupiedCell(Position),

    #[error("cell {}:{} is outside a {size}x{size} board", .position.x, .position.y)]
    OutOfBounds { position: Position, size: usize },

    #[error("game is already over")]
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BotError {
    #[error("no more cells to play for bot")]
    NoPlayableCell,
}

/// Errors raised while loading, validating or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to deserialize config: {0}")]
    Parse(serde_yaml_ng::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(serde_yaml_ng::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
