use std::path::PathBuf;

use crate::game::Player;

/// Errors that can occur while playing a match between agents.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("{player:?} selected illegal column {column} (legal: {legal:?})")]
    IllegalMove {
        player: Player,
        column: usize,
        legal: Vec<usize>,
    },

    #[error("{0:?} returned no move while legal columns remain")]
    NoMove(Player),

    #[error("game should be terminal but has no outcome")]
    MissingOutcome,
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
