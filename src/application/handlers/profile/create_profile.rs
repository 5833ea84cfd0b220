//! CreateProfileHandler - Command handler for onboarding.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{CalendarDate, DomainError, ErrorCode};
use crate::domain::profile::{DietPreference, Language, OnboardingDetails, UserProfile};
use crate::ports::ProfileRepository;

/// Command to create the profile from the onboarding answers.
#[derive(Debug, Clone)]
pub struct CreateProfileCommand {
    pub name: Option<String>,
    pub last_period_date: CalendarDate,
    pub diet_preference: DietPreference,
    pub language: Language,
}

/// Handler for onboarding.
pub struct CreateProfileHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl CreateProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Creates and stores the profile.
    ///
    /// # Errors
    ///
    /// - `ProfileAlreadyExists` if onboarding already happened
    /// - `StorageError` if the store cannot be read or written
    pub async fn handle(&self, cmd: CreateProfileCommand) -> Result<UserProfile, DomainError> {
        if self.profiles.exists().await? {
            return Err(DomainError::new(
                ErrorCode::ProfileAlreadyExists,
                "A profile already exists",
            ));
        }

        let name = cmd
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let profile = UserProfile::onboard(OnboardingDetails {
            name,
            last_period_date: cmd.last_period_date,
            diet_preference: cmd.diet_preference,
            language: cmd.language,
        });

        self.profiles.save(&profile).await?;

        info!(
            last_period_date = %profile.last_period_date(),
            language = %profile.language(),
            "Profile created"
        );

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryProfileStorage;
    use crate::application::handlers::test_support::{date, profile_starting, store_with};

    fn command() -> CreateProfileCommand {
        CreateProfileCommand {
            name: Some("  Priya ".to_string()),
            last_period_date: date("2024-01-01"),
            diet_preference: DietPreference::NonVegetarian,
            language: Language::Telugu,
        }
    }

    #[tokio::test]
    async fn creates_and_persists_profile() {
        let store = Arc::new(InMemoryProfileStorage::new());
        let handler = CreateProfileHandler::new(store.clone());

        let profile = handler.handle(command()).await.unwrap();

        assert_eq!(profile.name(), Some("Priya"));
        assert_eq!(profile.cycle_length().days(), 28);
        assert_eq!(profile.period_history(), &[date("2024-01-01")]);
        assert!(profile.onboarding_complete());
        assert_eq!(store.snapshot().await, Some(profile));
    }

    #[tokio::test]
    async fn blank_name_is_dropped() {
        let store = Arc::new(InMemoryProfileStorage::new());
        let handler = CreateProfileHandler::new(store);

        let profile = handler
            .handle(CreateProfileCommand {
                name: Some("   ".to_string()),
                ..command()
            })
            .await
            .unwrap();

        assert_eq!(profile.name(), None);
    }

    #[tokio::test]
    async fn refuses_second_onboarding() {
        let existing = profile_starting("2023-12-01");
        let store = store_with(existing.clone());
        let handler = CreateProfileHandler::new(store.clone());

        let err = handler.handle(command()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ProfileAlreadyExists);
        assert_eq!(store.snapshot().await, Some(existing));
    }
}
