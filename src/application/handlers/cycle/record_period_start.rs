//! RecordPeriodStartHandler - Command handler for "my period started".

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::load_profile;
use crate::domain::cycle::{record_period_start, ReconcileOutcome};
use crate::domain::foundation::{CalendarDate, DomainError};
use crate::domain::profile::UserProfile;
use crate::ports::ProfileRepository;

#[derive(Debug, Clone, Copy)]
pub struct RecordPeriodStartCommand {
    pub date: CalendarDate,
}

#[derive(Debug, Clone)]
pub struct RecordPeriodStartResult {
    pub profile: UserProfile,
    pub outcome: ReconcileOutcome,
}

pub struct RecordPeriodStartHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl RecordPeriodStartHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Load, reconcile, save. Recording the same date twice is harmless.
    // Not atomic: concurrent callers would need a transaction around this.
    pub async fn handle(
        &self,
        cmd: RecordPeriodStartCommand,
    ) -> Result<RecordPeriodStartResult, DomainError> {
        let mut profile = load_profile(self.profiles.as_ref()).await?;

        let outcome = record_period_start(&mut profile, cmd.date);
        self.profiles.save(&profile).await?;

        info!(
            date = %cmd.date,
            inserted = outcome.inserted,
            last_period_date = %outcome.last_period_date,
            cycle_length = outcome.cycle_length.days(),
            "Recorded period start"
        );

        Ok(RecordPeriodStartResult { profile, outcome })
    }
}
