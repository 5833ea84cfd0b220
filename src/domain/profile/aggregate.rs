//! UserProfile aggregate root.

use serde::{Deserialize, Serialize};

use super::{DietPreference, Language};
use crate::domain::cycle::{CycleLength, SymptomEntry};
use crate::domain::foundation::CalendarDate;

/// Inputs collected by the onboarding flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingDetails {
    pub name: Option<String>,
    pub last_period_date: CalendarDate,
    pub diet_preference: DietPreference,
    pub language: Language,
}

/// Everything the app remembers about one user's cycle and preferences.
///
/// Fields are read through accessors; period history, last period date and
/// cycle length are only written by [`crate::domain::cycle::reconciler`],
/// and symptom history only by [`crate::domain::cycle::symptom`].
///
/// Invariants held after construction and after every mutation:
/// - `period_history` is non-empty, strictly descending, without duplicates
/// - `period_history[0] == last_period_date`
/// - `symptom_history` is sorted descending by date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredProfile", into = "StoredProfile")]
pub struct UserProfile {
    name: Option<String>,
    last_period_date: CalendarDate,
    period_history: Vec<CalendarDate>,
    symptom_history: Vec<SymptomEntry>,
    cycle_length: CycleLength,
    diet_preference: DietPreference,
    language: Language,
    onboarding_complete: bool,
}

impl UserProfile {
    /// Creates the profile at the end of onboarding.
    pub fn onboard(details: OnboardingDetails) -> Self {
        Self {
            name: details.name.filter(|n| !n.trim().is_empty()),
            last_period_date: details.last_period_date,
            period_history: vec![details.last_period_date],
            symptom_history: Vec::new(),
            cycle_length: CycleLength::default(),
            diet_preference: details.diet_preference,
            language: details.language,
            onboarding_complete: true,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn last_period_date(&self) -> CalendarDate {
        self.last_period_date
    }

    /// Period start dates, most recent first.
    pub fn period_history(&self) -> &[CalendarDate] {
        &self.period_history
    }

    /// Logged symptoms, most recent first.
    pub fn symptom_history(&self) -> &[SymptomEntry] {
        &self.symptom_history
    }

    pub fn cycle_length(&self) -> CycleLength {
        self.cycle_length
    }

    pub fn diet_preference(&self) -> DietPreference {
        self.diet_preference
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn onboarding_complete(&self) -> bool {
        self.onboarding_complete
    }

    pub fn set_diet_preference(&mut self, diet: DietPreference) {
        self.diet_preference = diet;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name.filter(|n| !n.trim().is_empty());
    }

    pub(crate) fn period_history_mut(&mut self) -> &mut Vec<CalendarDate> {
        &mut self.period_history
    }

    pub(crate) fn symptom_history_mut(&mut self) -> &mut Vec<SymptomEntry> {
        &mut self.symptom_history
    }

    pub(crate) fn set_cycle_length(&mut self, length: CycleLength) {
        self.cycle_length = length;
    }

    /// Sorts, dedupes and re-anchors the period history.
    pub(crate) fn normalize_period_history(&mut self) {
        if self.period_history.is_empty() {
            self.period_history.push(self.last_period_date);
        }
        self.period_history.sort_unstable_by(|a, b| b.cmp(a));
        self.period_history.dedup();
        self.last_period_date = self.period_history[0];
    }

    /// Sorts symptom entries newest date first, keeping insertion order
    /// among entries of the same day.
    pub(crate) fn sort_symptom_history(&mut self) {
        self.symptom_history.sort_by(|a, b| b.date().cmp(&a.date()));
    }
}

/// Flat persisted layout. Older saves may lack the history lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    last_period_date: CalendarDate,
    #[serde(default)]
    period_history: Vec<CalendarDate>,
    #[serde(default)]
    symptom_history: Vec<SymptomEntry>,
    #[serde(default = "default_cycle_length_days")]
    cycle_length: u32,
    #[serde(default)]
    diet_preference: DietPreference,
    #[serde(default)]
    language: Language,
    #[serde(default)]
    onboarding_complete: bool,
}

fn default_cycle_length_days() -> u32 {
    CycleLength::DEFAULT_DAYS
}

impl From<StoredProfile> for UserProfile {
    fn from(stored: StoredProfile) -> Self {
        let mut profile = UserProfile {
            name: stored.name,
            last_period_date: stored.last_period_date,
            period_history: stored.period_history,
            symptom_history: stored.symptom_history,
            cycle_length: CycleLength::clamped(stored.cycle_length),
            diet_preference: stored.diet_preference,
            language: stored.language,
            onboarding_complete: stored.onboarding_complete,
        };
        if !profile.period_history.contains(&profile.last_period_date) {
            profile.period_history.push(profile.last_period_date);
        }
        profile.normalize_period_history();
        profile.sort_symptom_history();
        profile
    }
}

impl From<UserProfile> for StoredProfile {
    fn from(profile: UserProfile) -> Self {
        StoredProfile {
            name: profile.name,
            last_period_date: profile.last_period_date,
            period_history: profile.period_history,
            symptom_history: profile.symptom_history,
            cycle_length: profile.cycle_length.days(),
            diet_preference: profile.diet_preference,
            language: profile.language,
            onboarding_complete: profile.onboarding_complete,
        }
    }
}
