//! In-Memory Profile Storage Adapter
//!
//! Holds the profile in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::profile::UserProfile;
use crate::ports::{ProfileRepository, StorageError};

/// In-memory storage for the profile record
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStorage {
    profile: Arc<RwLock<Option<UserProfile>>>,
}

impl InMemoryProfileStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with `profile`
    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile: Arc::new(RwLock::new(Some(profile))),
        }
    }

    /// Current stored value (useful for tests)
    pub async fn snapshot(&self) -> Option<UserProfile> {
        self.profile.read().await.clone()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileStorage {
    async fn load(&self) -> Result<Option<UserProfile>, StorageError> {
        Ok(self.profile.read().await.clone())
    }

    async fn save(&self, profile: &UserProfile) -> Result<(), StorageError> {
        *self.profile.write().await = Some(profile.clone());
        Ok(())
    }

    async fn exists(&self) -> Result<bool, StorageError> {
        Ok(self.profile.read().await.is_some())
    }

    async fn delete(&self) -> Result<(), StorageError> {
        *self.profile.write().await = None;
        Ok(())
    }
}
