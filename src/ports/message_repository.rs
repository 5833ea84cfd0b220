//! MessageRepository port - chat history, stored apart from the profile.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::conversation::ChatMessage;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// All messages, oldest first. Empty when nothing was stored.
    async fn load_all(&self) -> Result<Vec<ChatMessage>, StorageError>;

    /// Appends messages after the existing history.
    async fn append(&self, messages: &[ChatMessage]) -> Result<(), StorageError>;

    /// Drops the whole history.
    async fn clear(&self) -> Result<(), StorageError>;
}
