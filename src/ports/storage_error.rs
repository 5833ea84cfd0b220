//! Errors shared by the storage ports.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur while reading or writing persisted state.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize {what}: {reason}")]
    SerializationFailed { what: &'static str, reason: String },

    #[error("Failed to deserialize {what}: {reason}")]
    DeserializationFailed { what: &'static str, reason: String },

    #[error("IO error: {0}")]
    IoError(String),
}

impl StorageError {
    pub fn serialization(what: &'static str, err: impl std::fmt::Display) -> Self {
        Self::SerializationFailed {
            what,
            reason: err.to_string(),
        }
    }

    pub fn deserialization(what: &'static str, err: impl std::fmt::Display) -> Self {
        Self::DeserializationFailed {
            what,
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}
