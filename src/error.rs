use std::path::PathBuf;

/// Errors that can occur while loading or appending round history.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("failed to read history from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed history record at {path}:{line}: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },

    #[error("failed to append to history {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that end a console session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("input closed")]
    InputClosed,

    #[error("round should be terminal but has no outcome")]
    MissingOutcome,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history error: {0}")]
    History(#[from] HistoryError),
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
