//! File-based Message Storage Adapter
//!
//! Keeps chat history as a JSON array, separate from the profile record.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::json_file::{read_json, remove_file, write_json};
use crate::domain::conversation::ChatMessage;
use crate::ports::{MessageRepository, StorageError};

/// File-based storage for chat history
#[derive(Debug, Clone)]
pub struct FileMessageStorage {
    file_path: PathBuf,
}

impl FileMessageStorage {
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

#[async_trait]
impl MessageRepository for FileMessageStorage {
    async fn load_all(&self) -> Result<Vec<ChatMessage>, StorageError> {
        let messages: Option<Vec<ChatMessage>> = read_json(&self.file_path, "messages").await?;
        Ok(messages.unwrap_or_default())
    }

    async fn append(&self, messages: &[ChatMessage]) -> Result<(), StorageError> {
        if messages.is_empty() {
            return Ok(());
        }

        let mut all = self.load_all().await?;
        all.extend_from_slice(messages);
        write_json(&self.file_path, &all, "messages").await?;

        debug!(appended = messages.len(), total = all.len(), "Saved messages");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        remove_file(&self.file_path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> FileMessageStorage {
        FileMessageStorage::new(dir.path().join("messages.json"))
    }

    #[tokio::test]
    async fn load_all_is_empty_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        assert!(storage_in(&temp_dir).load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_preserves_order_across_calls() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        let first = ChatMessage::user("I have cramps").unwrap();
        let second = ChatMessage::assistant("Try a warm compress").unwrap();
        let third = ChatMessage::user("Thanks").unwrap();

        storage.append(&[first.clone(), second.clone()]).await.unwrap();
        storage.append(&[third.clone()]).await.unwrap();

        assert_eq!(storage.load_all().await.unwrap(), vec![first, second, third]);
    }

    #[tokio::test]
    async fn append_nothing_does_not_create_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        storage.append(&[]).await.unwrap();

        assert!(!storage.file_path().exists());
    }

    #[tokio::test]
    async fn clear_drops_history() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);
        storage.append(&[ChatMessage::user("hello").unwrap()]).await.unwrap();

        storage.clear().await.unwrap();

        assert!(storage.load_all().await.unwrap().is_empty());
    }
}
