use std::path::PathBuf;

/// Errors reported by the game engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board dimensions {width}x{height} (both must be >= 1)")]
    InvalidDimension { width: usize, height: usize },

    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    #[error("row {row} is out of range (board has {height} rows)")]
    InvalidRow { row: usize, height: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("cell ({row}, {column}) is already occupied")]
    CellOccupied { row: usize, column: usize },

    #[error("history index {index} is out of range (history has {len} entries)")]
    OutOfRange { index: usize, len: usize },

    #[error("at least 2 players are required, got {count}")]
    NotEnoughPlayers { count: usize },

    #[error("players {first} and {second} use the same mark")]
    DuplicatePlayer { first: usize, second: usize },
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

    #[error("invalid game setup: {0}")]
    Game(#[from] GameError),
}
