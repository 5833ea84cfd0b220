//! File-based Profile Storage Adapter
//!
//! Stores the profile record as a single JSON document on disk.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::json_file::{read_json, remove_file, write_json};
use crate::domain::profile::UserProfile;
use crate::ports::{ProfileRepository, StorageError};

/// File-based storage for the profile record
#[derive(Debug, Clone)]
pub struct FileProfileStorage {
    file_path: PathBuf,
}

impl FileProfileStorage {
    /// Create a storage that reads and writes `file_path`
    ///
    /// # Example
    /// ```
    /// use sakhi::adapters::storage::FileProfileStorage;
    ///
    /// let storage = FileProfileStorage::new("./data/profile.json");
    /// assert!(storage.file_path().ends_with("profile.json"));
    /// ```
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
impl ProfileRepository for FileProfileStorage {
    async fn load(&self) -> Result<Option<UserProfile>, StorageError> {
        let profile: Option<UserProfile> = read_json(&self.file_path, "profile").await?;
        debug!(path = %self.file_path.display(), found = profile.is_some(), "Loaded profile");
        Ok(profile)
    }

    async fn save(&self, profile: &UserProfile) -> Result<(), StorageError> {
        write_json(&self.file_path, profile, "profile").await?;
        debug!(
            path = %self.file_path.display(),
            last_period_date = %profile.last_period_date(),
            "Saved profile"
        );
        Ok(())
    }

    async fn exists(&self) -> Result<bool, StorageError> {
        Ok(tokio::fs::try_exists(&self.file_path).await?)
    }

    async fn delete(&self) -> Result<(), StorageError> {
        remove_file(&self.file_path).await?;
        info!(path = %self.file_path.display(), "Deleted profile");
        Ok(())
    }
}
