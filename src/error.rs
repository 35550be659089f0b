use std::path::PathBuf;

/// Errors returned when a move cannot be applied.
///
/// None of these are fatal: the board and turn are left untouched and the
/// caller is expected to report the problem and wait for the next input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is out of range (board has {columns} columns)")]
    InvalidColumn { column: usize, columns: usize },

    #[error("the game is over")]
    GameOver,
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
