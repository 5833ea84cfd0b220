//! Shared fixtures for handler tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::adapters::{FixedClock, InMemoryProfileStorage};
use crate::domain::foundation::CalendarDate;
use crate::domain::profile::{DietPreference, Language, OnboardingDetails, UserProfile};
use crate::ports::{Clock, ProfileRepository, StorageError};

pub fn date(s: &str) -> CalendarDate {
    CalendarDate::parse_iso(s).unwrap()
}

pub fn profile_starting(s: &str) -> UserProfile {
    UserProfile::onboard(OnboardingDetails {
        name: Some("Asha".to_string()),
        last_period_date: date(s),
        diet_preference: DietPreference::Vegetarian,
        language: Language::English,
    })
}

pub fn store_with(profile: UserProfile) -> Arc<InMemoryProfileStorage> {
    Arc::new(InMemoryProfileStorage::with_profile(profile))
}

pub fn clock_at(s: &str) -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(date(s)))
}

/// Loads fine, fails every write.
pub struct FailingProfileRepository {
    profile: Option<UserProfile>,
}

impl FailingProfileRepository {
    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile: Some(profile),
        }
    }
}

#[async_trait]
impl ProfileRepository for FailingProfileRepository {
    async fn load(&self) -> Result<Option<UserProfile>, StorageError> {
        Ok(self.profile.clone())
    }

    async fn save(&self, _profile: &UserProfile) -> Result<(), StorageError> {
        Err(StorageError::IoError("Simulated save failure".to_string()))
    }

    async fn exists(&self) -> Result<bool, StorageError> {
        Ok(self.profile.is_some())
    }

    async fn delete(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
