//! Error types shared across the engine.

use std::path::PathBuf;

use crate::board::{Coord, Player, Topology};

/// Errors reported by board construction and the game state machine.
///
/// Every per-move rejection (`WrongTurn`, `OccupiedOrInvalidTile`,
/// `NoLegalCapture`, `MustPlay`) leaves the game exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid {topology} board size {size}")]
    InvalidSize { topology: Topology, size: i32 },

    #[error("game has not been started")]
    NotStarted,

    #[error("game has already been started")]
    AlreadyStarted,

    #[error("it is {expected}'s turn, not {got}'s")]
    WrongTurn { expected: Player, got: Player },

    #[error("tile {0} is off the board or already holds a disc")]
    OccupiedOrInvalidTile(Coord),

    #[error("a disc at {0} would not capture anything")]
    NoLegalCapture(Coord),

    #[error("{0} has a legal move and cannot pass")]
    MustPlay(Player),
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

/// Errors that can occur while running or recording self-play games.
#[derive(Debug, thiserror::Error)]
pub enum SelfPlayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("game {game_id}: {source}")]
    Game { game_id: usize, source: GameError },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("self-play worker thread panicked")]
    WorkerPanicked,

    #[error("failed to write game record: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode game record: {0}")]
    Json(#[from] serde_json::Error),
}
