//! In-Memory Message Storage Adapter

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::ChatMessage;
use crate::ports::{MessageRepository, StorageError};

/// In-memory chat history
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageStorage {
    messages: Arc<RwLock<Vec<ChatMessage>>>,
}

impl InMemoryMessageStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored messages
    pub async fn message_count(&self) -> usize {
        self.messages.read().await.len()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageStorage {
    async fn load_all(&self) -> Result<Vec<ChatMessage>, StorageError> {
        Ok(self.messages.read().await.clone())
    }

    async fn append(&self, messages: &[ChatMessage]) -> Result<(), StorageError> {
        self.messages.write().await.extend_from_slice(messages);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.messages.write().await.clear();
        Ok(())
    }
}
