//! UpdateSettingsHandler - Command handler for the settings form.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::load_profile;
use crate::domain::cycle::reconciler::{correct_latest_period, override_cycle_length};
use crate::domain::cycle::CycleLength;
use crate::domain::foundation::{CalendarDate, DomainError};
use crate::domain::profile::{DietPreference, Language, UserProfile};
use crate::ports::ProfileRepository;

/// Fields the user changed. `None` leaves a field as it is.
#[derive(Debug, Clone, Default)]
pub struct UpdateSettingsCommand {
    /// Correction of the most recent period start.
    pub last_period_date: Option<CalendarDate>,
    /// Explicit cycle length, accepted in 20..=45 days.
    pub cycle_length_days: Option<u32>,
    pub diet_preference: Option<DietPreference>,
    pub language: Option<Language>,
    /// A blank name clears it.
    pub name: Option<String>,
}

pub struct UpdateSettingsHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl UpdateSettingsHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Applies the edits and persists the profile.
    ///
    /// Everything is validated before the profile is touched, so a rejected
    /// cycle length leaves the stored record unchanged.
    ///
    /// # Errors
    ///
    /// - `ProfileNotFound` before onboarding
    /// - `OutOfRange` for a cycle length outside 20..=45
    pub async fn handle(&self, cmd: UpdateSettingsCommand) -> Result<UserProfile, DomainError> {
        let cycle_length = cmd
            .cycle_length_days
            .map(CycleLength::from_settings)
            .transpose()?;

        let mut profile = load_profile(self.profiles.as_ref()).await?;

        if let Some(date) = cmd.last_period_date {
            if date != profile.last_period_date() {
                correct_latest_period(&mut profile, date);
                info!(last_period_date = %date, "Corrected last period date");
            }
        }

        if let Some(length) = cycle_length {
            override_cycle_length(&mut profile, length);
            info!(cycle_length = length.days(), "Cycle length set manually");
        }

        if let Some(diet) = cmd.diet_preference {
            profile.set_diet_preference(diet);
        }

        if let Some(language) = cmd.language {
            profile.set_language(language);
        }

        if let Some(name) = cmd.name {
            let trimmed = name.trim();
            profile.set_name((!trimmed.is_empty()).then(|| trimmed.to_string()));
        }

        self.profiles.save(&profile).await?;
        Ok(profile)
    }
}
