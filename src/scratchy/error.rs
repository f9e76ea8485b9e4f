use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScratchyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("IO error at {path}: {source}")]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to read matched path: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ScratchyError {
    /// Wraps an I/O error with the path it happened on.
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScratchyError::File {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScratchyError>;
