//! LogSymptomHandler - Command handler for symptom logging.

use std::sync::Arc;
use tracing::info;

use crate::application::handlers::load_profile;
use crate::domain::cycle::{log_symptom, DayCounting, SymptomEntry};
use crate::domain::foundation::DomainError;
use crate::ports::{Clock, ProfileRepository};

#[derive(Debug, Clone)]
pub struct LogSymptomCommand {
    pub symptom: String,
}

pub struct LogSymptomHandler {
    profiles: Arc<dyn ProfileRepository>,
    clock: Arc<dyn Clock>,
    counting: DayCounting,
}

impl LogSymptomHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, clock: Arc<dyn Clock>, counting: DayCounting) -> Self {
        Self {
            profiles,
            clock,
            counting,
        }
    }

    /// Logs the symptom for today, tagged with the current cycle day.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for a blank label
    /// - `ProfileNotFound` before onboarding
    pub async fn handle(&self, cmd: LogSymptomCommand) -> Result<SymptomEntry, DomainError> {
        let mut profile = load_profile(self.profiles.as_ref()).await?;

        let entry = log_symptom(&mut profile, &cmd.symptom, self.clock.today(), self.counting)?;
        self.profiles.save(&profile).await?;

        info!(
            symptom = entry.symptom(),
            date = %entry.date(),
            cycle_day = ?entry.cycle_day(),
            "Logged symptom"
        );

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryProfileStorage;
    use crate::application::handlers::test_support::{clock_at, date, profile_starting, store_with};
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn logs_symptom_with_cycle_day() {
        let store = store_with(profile_starting("2024-01-01"));
        let handler = LogSymptomHandler::new(store.clone(), clock_at("2024-01-03"), DayCounting::Wrapped);

        let entry = handler
            .handle(LogSymptomCommand {
                symptom: "Cramps".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(entry.symptom(), "Cramps");
        assert_eq!(entry.date(), date("2024-01-03"));
        assert_eq!(entry.cycle_day(), Some(3));

        let stored = store.snapshot().await.unwrap();
        assert_eq!(stored.symptom_history(), &[entry]);
    }

    #[tokio::test]
    async fn newest_entry_comes_first() {
        let store = store_with(profile_starting("2024-01-01"));
        let handler = LogSymptomHandler::new(store.clone(), clock_at("2024-01-03"), DayCounting::Wrapped);

        for symptom in ["Cramps", "Headache"] {
            handler
                .handle(LogSymptomCommand {
                    symptom: symptom.to_string(),
                })
                .await
                .unwrap();
        }

        let stored = store.snapshot().await.unwrap();
        assert_eq!(stored.symptom_history()[0].symptom(), "Headache");
        assert_eq!(stored.symptom_history()[1].symptom(), "Cramps");
    }

    #[tokio::test]
    async fn blank_symptom_is_rejected_without_saving() {
        let original = profile_starting("2024-01-01");
        let store = store_with(original.clone());
        let handler = LogSymptomHandler::new(store.clone(), clock_at("2024-01-03"), DayCounting::Wrapped);

        let err = handler
            .handle(LogSymptomCommand {
                symptom: "  ".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyField);
        assert_eq!(store.snapshot().await, Some(original));
    }

    #[tokio::test]
    async fn requires_a_profile() {
        let handler = LogSymptomHandler::new(
            Arc::new(InMemoryProfileStorage::new()),
            clock_at("2024-01-03"),
            DayCounting::Wrapped,
        );

        let err = handler
            .handle(LogSymptomCommand {
                symptom: "Cramps".to_string(),
            })
            .await
            .unwrap_err();

        assert!(err.is_profile_not_found());
    }
}
