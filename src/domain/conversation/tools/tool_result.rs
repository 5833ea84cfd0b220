//! Tool execution result value object.
//!
//! Represents the outcome category of an assistant tool call.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Outcome of a tool execution.
///
/// Failures are reported to the model as text, never raised, so the
/// category is kept alongside for logging and tests.
///
/// # Examples
///
/// ```
/// use sakhi::domain::conversation::tools::ToolResult;
///
/// assert!(ToolResult::Success.is_success());
/// assert!(!ToolResult::UnknownTool.is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolResult {
    /// Tool executed and the profile was updated
    Success,

    /// Parameters failed validation (missing symptom name, malformed date)
    ValidationError,

    /// No profile exists yet
    NotFound,

    /// The model asked for a tool that is not registered
    UnknownTool,

    /// Storage or other unexpected failure
    InternalError,
}

impl ToolResult {
    /// Returns true if the tool executed successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns true if the error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::InternalError)
    }

    /// Returns a human-readable description of the result.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Success => "Tool executed successfully",
            Self::ValidationError => "Tool parameters failed validation",
            Self::NotFound => "No profile to update",
            Self::UnknownTool => "Tool is not registered",
            Self::InternalError => "Unexpected system error occurred",
        }
    }

    /// Classifies a domain error.
    pub fn from_error(err: &DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => Self::ValidationError,
            ErrorCode::ProfileNotFound => Self::NotFound,
            ErrorCode::UnknownTool => Self::UnknownTool,
            ErrorCode::ProfileAlreadyExists
            | ErrorCode::StorageError
            | ErrorCode::InternalError => Self::InternalError,
        }
    }
}

impl std::fmt::Display for ToolResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
