use std::path::PathBuf;

/// Errors returned when a token cannot be placed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is outside the board")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the match is already over")]
    MatchOver,
}

/// Errors raised by a column source while waiting for a move.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input closed before a column was chosen")]
    Eof,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that abort a running match.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("render error: {0}")]
    Render(std::io::Error),

    #[error("board is full and draw detection is disabled")]
    NoLegalMove,
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
