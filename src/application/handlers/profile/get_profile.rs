//! GetProfileHandler - Query handler for the stored profile.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::profile::UserProfile;
use crate::ports::ProfileRepository;

pub struct GetProfileHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl GetProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Returns the profile, or `ProfileNotFound` before onboarding.
    pub async fn handle(&self) -> Result<UserProfile, DomainError> {
        crate::application::handlers::load_profile(self.profiles.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryProfileStorage;
    use crate::application::handlers::test_support::{profile_starting, store_with};

    #[tokio::test]
    async fn returns_stored_profile() {
        let profile = profile_starting("2024-01-01");
        let handler = GetProfileHandler::new(store_with(profile.clone()));

        assert_eq!(handler.handle().await.unwrap(), profile);
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let handler = GetProfileHandler::new(Arc::new(InMemoryProfileStorage::new()));

        assert!(handler.handle().await.unwrap_err().is_profile_not_found());
    }
}
