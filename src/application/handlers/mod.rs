//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Each one
//! loads the profile, calls the domain, and saves; none keeps a copy.

pub mod assistant;
pub mod cycle;
pub mod profile;

#[cfg(test)]
pub(crate) mod test_support;

pub use assistant::{
    AppendMessagesCommand, AppendMessagesHandler, BuildAssistantContextHandler,
    ExecuteAssistantActionHandler,
};
pub use cycle::{
    CycleStatusView, GetCycleStatusHandler, LogSymptomCommand, LogSymptomHandler,
    RecordPeriodStartCommand, RecordPeriodStartHandler, RecordPeriodStartResult,
};
pub use profile::{
    CreateProfileCommand, CreateProfileHandler, GetProfileHandler, UpdateSettingsCommand,
    UpdateSettingsHandler,
};

use crate::domain::foundation::DomainError;
use crate::domain::profile::UserProfile;
use crate::ports::ProfileRepository;

/// Loads the profile every mutation needs.
pub(crate) async fn load_profile(profiles: &dyn ProfileRepository) -> Result<UserProfile, DomainError> {
    profiles
        .load()
        .await?
        .ok_or_else(DomainError::profile_not_found)
}
