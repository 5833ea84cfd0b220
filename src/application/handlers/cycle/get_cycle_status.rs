//! GetCycleStatusHandler - Query handler for the home screen status.

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::application::handlers::load_profile;
use crate::domain::cycle::insight::{insight_for, insight_title};
use crate::domain::cycle::{compute_status, CycleLength, CycleStatus, DayCounting};
use crate::domain::foundation::{CalendarDate, DomainError};
use crate::ports::{Clock, ProfileRepository};

/// Status plus the daily tip for the user's language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleStatusView {
    pub today: CalendarDate,
    pub last_period_date: CalendarDate,
    pub cycle_length: CycleLength,
    #[serde(flatten)]
    pub status: CycleStatus,
    pub insight_title: &'static str,
    pub insight: &'static str,
}

pub struct GetCycleStatusHandler {
    profiles: Arc<dyn ProfileRepository>,
    clock: Arc<dyn Clock>,
    counting: DayCounting,
}

impl GetCycleStatusHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, clock: Arc<dyn Clock>, counting: DayCounting) -> Self {
        Self {
            profiles,
            clock,
            counting,
        }
    }

    pub async fn handle(&self) -> Result<CycleStatusView, DomainError> {
        let profile = load_profile(self.profiles.as_ref()).await?;
        let today = self.clock.today();

        let status = compute_status(
            profile.last_period_date(),
            profile.cycle_length(),
            today,
            self.counting,
        );

        debug!(
            day = status.day,
            phase = %status.phase,
            next_period_date = %status.next_period_date,
            "Computed cycle status"
        );

        Ok(CycleStatusView {
            today,
            last_period_date: profile.last_period_date(),
            cycle_length: profile.cycle_length(),
            status,
            insight_title: insight_title(profile.language()),
            insight: insight_for(status.phase, profile.language()),
        })
    }
}
