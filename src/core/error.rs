//! Defines the custom error types for the email-sift application.

use std::io;
use thiserror::Error;

/// The primary error type for ingestion, batch verification and export.
///
/// Classification itself never fails: malformed addresses are reported as
/// `invalid` results, not as errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error occurring during configuration loading or validation.
    #[error("Configuration Error: {0}")]
    Config(String),

    /// Error related to file input/output operations.
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),

    /// Error during JSON serialization.
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error parsing the TOML configuration file.
    #[error("TOML Parsing Error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Error related to concurrency or task execution.
    #[error("Task Execution Error: {0}")]
    Task(String),

    /// The submitted batch exceeds the configured maximum size.
    #[error("Batch of {size} emails exceeds the maximum of {max}")]
    BatchTooLarge {
        /// Number of emails submitted.
        size: usize,
        /// Configured limit.
        max: usize,
    },

    /// An underlying error that doesn't fit other categories, using anyhow.
    #[error("Generic Error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            AppError::Task(format!("verification worker panicked: {}", err))
        } else {
            AppError::Task(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
