//! Cycle tracking configuration

use serde::Deserialize;

use crate::domain::cycle::DayCounting;

/// Engine-wide tracking rules
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TrackingConfig {
    /// How the cycle day is counted past the expected cycle length.
    /// Applied to both the status display and symptom tagging.
    #[serde(default)]
    pub day_counting: DayCounting,
}
