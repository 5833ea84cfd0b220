//! CycleLength value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Length of a menstrual cycle in days.
///
/// The accepted band covers everything the history reconciler can derive
/// (averages of gaps strictly between 15 and 45 days) and everything the
/// settings form accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CycleLength(u32);

impl CycleLength {
    pub const MIN_DAYS: u32 = 16;
    pub const MAX_DAYS: u32 = 45;
    pub const DEFAULT_DAYS: u32 = 28;

    /// Lower bound for a length typed into the settings form.
    pub const SETTINGS_MIN_DAYS: u32 = 20;

    /// Creates a cycle length inside the plausible band.
    pub fn new(days: u32) -> Result<Self, ValidationError> {
        Self::within("cycle_length", days, Self::MIN_DAYS, Self::MAX_DAYS)
    }

    /// Creates a cycle length from a manual settings edit (20..=45 days).
    pub fn from_settings(days: u32) -> Result<Self, ValidationError> {
        Self::within("cycle_length", days, Self::SETTINGS_MIN_DAYS, Self::MAX_DAYS)
    }

    /// Pulls any stored value into the band. Zero falls back to the default.
    pub fn clamped(days: u32) -> Self {
        if days == 0 {
            Self::default()
        } else {
            Self(days.clamp(Self::MIN_DAYS, Self::MAX_DAYS))
        }
    }

    fn within(field: &str, days: u32, min: u32, max: u32) -> Result<Self, ValidationError> {
        if (min..=max).contains(&days) {
            Ok(Self(days))
        } else {
            Err(ValidationError::out_of_range(
                field,
                i64::from(min),
                i64::from(max),
                i64::from(days),
            ))
        }
    }

    /// Returns the number of days.
    pub fn days(&self) -> u32 {
        self.0
    }

    /// Returns the number of days for signed day arithmetic.
    pub fn as_i64(&self) -> i64 {
        i64::from(self.0)
    }
}

impl Default for CycleLength {
    fn default() -> Self {
        Self(Self::DEFAULT_DAYS)
    }
}

impl TryFrom<u32> for CycleLength {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CycleLength> for u32 {
    fn from(length: CycleLength) -> Self {
        length.0
    }
}

impl fmt::Display for CycleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.0)
    }
}
