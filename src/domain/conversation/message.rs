//! Chat message entity.
//!
//! Messages are immutable records of user/assistant exchanges. They are
//! persisted separately from the profile and only read back to seed the
//! assistant's session context.

use crate::domain::foundation::{MessageId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Role name expected by the chat model's history format.
    pub fn model_role(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "model",
        }
    }
}

/// An immutable chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: MessageId,
    role: Role,
    text: String,
    timestamp: Timestamp,
}

impl ChatMessage {
    /// Creates a message stamped with the current time.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if text is blank
    pub fn new(role: Role, text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        Ok(Self {
            id: MessageId::new(),
            role,
            text,
            timestamp: Timestamp::now(),
        })
    }

    /// Creates a user message.
    pub fn user(text: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(Role::User, text)
    }

    /// Creates an assistant message.
    pub fn assistant(text: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(Role::Assistant, text)
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// True when the text carries something worth replaying to the model.
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
