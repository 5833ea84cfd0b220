//! End-to-end tests for cycle tracking over the JSON file stores.
//!
//! These tests verify the full flow a user goes through:
//! 1. Onboarding creates the profile on disk
//! 2. Status is computed from the stored profile
//! 3. Assistant tool calls record periods and symptoms
//! 4. Settings edits and the assistant context see the same record
//!
//! Uses a fixed clock so every date is deterministic.

use std::sync::Arc;
use tempfile::TempDir;

use sakhi::adapters::{FileMessageStorage, FileProfileStorage, FixedClock};
use sakhi::application::{
    AppendMessagesCommand, AppendMessagesHandler, BuildAssistantContextHandler,
    CreateProfileCommand, CreateProfileHandler, ExecuteAssistantActionHandler,
    GetCycleStatusHandler, UpdateSettingsCommand, UpdateSettingsHandler,
};
use sakhi::domain::conversation::tools::{ToolCall, ToolResult};
use sakhi::domain::conversation::ContextLimits;
use sakhi::domain::cycle::{DayCounting, Phase};
use sakhi::domain::foundation::{CalendarDate, ErrorCode};
use sakhi::domain::profile::{DietPreference, Language};
use sakhi::ports::{Clock, MessageRepository, ProfileRepository};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn date(s: &str) -> CalendarDate {
    CalendarDate::parse_iso(s).unwrap()
}

struct Harness {
    dir: TempDir,
    profiles: Arc<FileProfileStorage>,
    messages: Arc<FileMessageStorage>,
}

impl Harness {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        Self {
            profiles: Arc::new(FileProfileStorage::new(dir.path().join("profile.json"))),
            messages: Arc::new(FileMessageStorage::new(dir.path().join("messages.json"))),
            dir,
        }
    }

    fn clock(today: &str) -> Arc<dyn Clock> {
        Arc::new(FixedClock::new(date(today)))
    }

    async fn onboard(&self, last_period: &str) {
        CreateProfileHandler::new(self.profiles.clone())
            .handle(CreateProfileCommand {
                name: Some("Meena".to_string()),
                last_period_date: date(last_period),
                diet_preference: DietPreference::Vegetarian,
                language: Language::Hindi,
            })
            .await
            .unwrap();
    }

    fn assistant(&self, today: &str) -> ExecuteAssistantActionHandler {
        ExecuteAssistantActionHandler::new(self.profiles.clone(), Self::clock(today), DayCounting::Wrapped)
    }

    fn status(&self, today: &str) -> GetCycleStatusHandler {
        GetCycleStatusHandler::new(self.profiles.clone(), Self::clock(today), DayCounting::Wrapped)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn onboarding_then_status() {
    let h = Harness::new();
    h.onboard("2024-01-01").await;

    let view = h.status("2024-01-06").handle().await.unwrap();

    assert_eq!(view.status.day, 6);
    assert_eq!(view.status.phase, Phase::Follicular);
    assert_eq!(view.status.next_period_date, date("2024-01-29"));
    assert_eq!(view.status.days_until_next, 23);
}

#[tokio::test]
async fn assistant_calls_update_the_stored_profile() {
    let h = Harness::new();
    h.onboard("2024-01-01").await;
    let assistant = h.assistant("2024-02-02");

    let responses = assistant
        .handle_all(&[
            ToolCall::new("updatePeriodDate", serde_json::json!({"date": "2024-01-31"})),
            ToolCall::new("logSymptom", serde_json::json!({"symptomName": "Cramps"})),
        ])
        .await;

    assert_eq!(
        responses[0].message(),
        "Period date updated successfully. Cycle length recalculated."
    );
    assert_eq!(
        responses[1].message(),
        "Symptom 'Cramps' logged successfully for today."
    );

    let stored = h.profiles.load().await.unwrap().unwrap();
    assert_eq!(stored.period_history(), &[date("2024-01-31"), date("2024-01-01")]);
    assert_eq!(stored.cycle_length().days(), 30);
    assert_eq!(stored.symptom_history()[0].cycle_day(), Some(3));
    assert_eq!(stored.symptom_history()[0].date(), date("2024-02-02"));
}

#[tokio::test]
async fn outlier_gap_is_ignored_across_several_periods() {
    let h = Harness::new();
    h.onboard("2023-09-01").await;

    // gaps: 120 (missed logging), then 28, 28
    for (today, start) in [
        ("2023-12-30", "2023-12-30"),
        ("2024-01-27", "2024-01-27"),
        ("2024-02-24", "2024-02-24"),
    ] {
        let response = h
            .assistant(today)
            .handle(&ToolCall::new("updatePeriodDate", serde_json::json!({"date": "today"})))
            .await;
        assert!(response.is_success(), "{}", response.message());
        assert_eq!(h.profiles.load().await.unwrap().unwrap().last_period_date(), date(start));
    }

    let stored = h.profiles.load().await.unwrap().unwrap();
    assert_eq!(stored.cycle_length().days(), 28);
}

#[tokio::test]
async fn symptom_day_survives_cycle_length_edit() {
    let h = Harness::new();
    h.onboard("2024-01-01").await;

    h.assistant("2024-01-03")
        .handle(&ToolCall::new("logSymptom", serde_json::json!({"symptomName": "Headache"})))
        .await;

    UpdateSettingsHandler::new(h.profiles.clone())
        .handle(UpdateSettingsCommand {
            cycle_length_days: Some(35),
            ..Default::default()
        })
        .await
        .unwrap();

    let stored = h.profiles.load().await.unwrap().unwrap();
    assert_eq!(stored.cycle_length().days(), 35);
    assert_eq!(stored.symptom_history()[0].cycle_day(), Some(3));
}

#[tokio::test]
async fn context_reflects_latest_profile_and_history() {
    let h = Harness::new();
    h.onboard("2024-01-01").await;

    h.assistant("2024-01-02")
        .handle(&ToolCall::new("logSymptom", serde_json::json!({"symptomName": "Cramps"})))
        .await;
    AppendMessagesHandler::new(h.messages.clone())
        .handle(AppendMessagesCommand::exchange("I have cramps", "Try a hot water bag"))
        .await
        .unwrap();

    let context = BuildAssistantContextHandler::new(
        h.profiles.clone(),
        h.messages.clone(),
        Harness::clock("2024-01-02"),
        ContextLimits::default(),
    )
    .handle()
    .await
    .unwrap();

    assert!(context.system_instruction.contains("Recent Symptoms: Cramps (Day 2)"));
    assert!(context.system_instruction.contains("Preferred Language: Hindi"));
    assert_eq!(context.history.len(), 2);
    assert_eq!(context.history[1].role, "model");
    assert_eq!(h.messages.load_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn tool_calls_without_profile_fail_softly() {
    let h = Harness::new();

    let response = h
        .assistant("2024-01-02")
        .handle(&ToolCall::new("updatePeriodDate", serde_json::json!({"date": "2024-01-01"})))
        .await;

    assert_eq!(response.result(), ToolResult::NotFound);
    assert!(!h.profiles.exists().await.unwrap());
}

#[tokio::test]
async fn second_onboarding_is_rejected() {
    let h = Harness::new();
    h.onboard("2024-01-01").await;

    let err = CreateProfileHandler::new(h.profiles.clone())
        .handle(CreateProfileCommand {
            name: None,
            last_period_date: date("2024-02-01"),
            diet_preference: DietPreference::NonVegetarian,
            language: Language::English,
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ProfileAlreadyExists);
}

#[tokio::test]
async fn out_of_band_stored_length_can_still_be_edited() {
    let h = Harness::new();
    std::fs::write(
        h.dir.path().join("profile.json"),
        r#"{"lastPeriodDate": "2024-01-01", "cycleLength": 50, "onboardingComplete": true}"#,
    )
    .unwrap();

    let view = h.status("2024-01-06").handle().await.unwrap();
    assert_eq!(view.status.day, 6);

    let profile = UpdateSettingsHandler::new(h.profiles.clone())
        .handle(UpdateSettingsCommand {
            cycle_length_days: Some(32),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(profile.cycle_length().days(), 32);
}

#[tokio::test]
async fn extended_year_from_the_assistant_is_rejected() {
    let h = Harness::new();
    h.onboard("2024-01-01").await;

    let response = h
        .assistant("2024-01-06")
        .handle(&ToolCall::new("updatePeriodDate", serde_json::json!({"date": "+262142-12-20"})))
        .await;

    assert_eq!(response.result(), ToolResult::ValidationError);
    let view = h.status("2024-01-06").handle().await.unwrap();
    assert_eq!(view.status.day, 6);
}
