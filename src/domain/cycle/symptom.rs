//! Symptom logging.

use serde::{Deserialize, Serialize};

use super::DayCounting;
use crate::domain::foundation::{CalendarDate, ValidationError};
use crate::domain::profile::UserProfile;

/// One logged symptom, stamped with the cycle day it occurred on.
///
/// Immutable once created: the cycle day reflects the profile at logging
/// time and is not recomputed when the cycle length changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomEntry {
    date: CalendarDate,
    symptom: String,
    // absent in entries saved before cycle days were tracked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cycle_day: Option<u32>,
}

impl SymptomEntry {
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn symptom(&self) -> &str {
        &self.symptom
    }

    pub fn cycle_day(&self) -> Option<u32> {
        self.cycle_day
    }
}

/// Logs `label` for `today` and returns the new entry.
///
/// The cycle day uses the same counting rule as the status display.
pub fn log_symptom(
    profile: &mut UserProfile,
    label: &str,
    today: CalendarDate,
    counting: DayCounting,
) -> Result<SymptomEntry, ValidationError> {
    let symptom = label.trim();
    if symptom.is_empty() {
        return Err(ValidationError::empty_field("symptom"));
    }

    let cycle_day = counting
        .cycle_day(profile.last_period_date(), profile.cycle_length(), today)
        .max(1);

    let entry = SymptomEntry {
        date: today,
        symptom: symptom.to_string(),
        cycle_day: Some(cycle_day),
    };

    profile.symptom_history_mut().insert(0, entry.clone());
    profile.sort_symptom_history();

    Ok(entry)
}
