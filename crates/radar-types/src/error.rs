//! Error types for radar-gen

use thiserror::Error;

/// Configuration errors reported before generation starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Record count must be positive")]
    InvalidRecordCount,

    #[error("Output path is not writable: {0}")]
    OutputNotWritable(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    Csv(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
