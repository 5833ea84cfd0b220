//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Profile and message files must differ")]
    StorageFilesCollide,

    #[error("File name must not contain a path: {0}")]
    FileNameHasPath(String),

    #[error("Message window must be between 1 and {max}, got {actual}")]
    InvalidMessageWindow { max: usize, actual: usize },

    #[error("Recent symptom count must be between 1 and {max}, got {actual}")]
    InvalidRecentSymptoms { max: usize, actual: usize },

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}
