//! ProfileRepository port - persistence of the single active profile.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::profile::UserProfile;

/// Stores the one profile record this device tracks.
///
/// Every mutation writes the whole record back; there is no partial update.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Loads the profile, or `None` if onboarding has not happened yet.
    ///
    /// # Errors
    /// Returns `StorageError` if the record exists but cannot be read
    async fn load(&self) -> Result<Option<UserProfile>, StorageError>;

    /// Replaces the stored profile.
    async fn save(&self, profile: &UserProfile) -> Result<(), StorageError>;

    /// Check if a profile has been stored
    async fn exists(&self) -> Result<bool, StorageError>;

    /// Removes the stored profile. Missing records are not an error.
    async fn delete(&self) -> Result<(), StorageError>;
}
