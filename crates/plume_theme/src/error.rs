//! Theme error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or applying theme configuration
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to parse theme config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read theme config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown color token: {0}")]
    UnknownToken(String),

    #[error("invalid color {value:?} for token {token}")]
    InvalidColor { token: String, value: String },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
