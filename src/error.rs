//! Error types for Tale.

use thiserror::Error;

/// Library-level error type for Tale operations.
#[derive(Error, Debug)]
pub enum TaleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid storage reference: {0}")]
    InvalidUri(String),

    #[error("Recognition failed: {0}")]
    Recognition(String),

    #[error("Malformed timestamp: {0:?}")]
    MalformedTimestamp(String),

    #[error("Word {0:?} carries no speaker tag")]
    MissingSpeakerTag(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Tale operations.
pub type Result<T> = std::result::Result<T, TaleError>;
