//! Crate-level error type.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::extract::ExtractError;
use crate::parser::ParseError;

/// Errors that abort a mining run.
#[derive(Debug, Error)]
pub enum MineError {
    /// A source file could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A declaration anchor is missing and strict mode is on.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory listing failed.
    #[error("Failed to list {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },

    /// The module root does not exist or is not a directory.
    #[error("Module root not found: {}", .0.display())]
    ModuleNotFound(PathBuf),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MineError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MineError::Io {
            path: path.into(),
            source,
        }
    }
}
