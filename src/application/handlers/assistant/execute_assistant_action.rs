//! ExecuteAssistantActionHandler - runs tool calls requested by the chat model.
//!
//! Calls go through the same handlers the settings and mood screens use.
//! Every outcome, including failures, comes back as a `ToolResponse` for the
//! model to relay; nothing here returns an error to the caller.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::handlers::cycle::{
    LogSymptomCommand, LogSymptomHandler, RecordPeriodStartCommand, RecordPeriodStartHandler,
};
use crate::domain::conversation::tools::{AssistantAction, ToolCall, ToolResponse, ToolResult};
use crate::domain::cycle::DayCounting;
use crate::domain::foundation::DomainError;
use crate::ports::{Clock, ProfileRepository};

pub const PERIOD_UPDATED_MESSAGE: &str = "Period date updated successfully. Cycle length recalculated.";

pub fn symptom_logged_message(symptom: &str) -> String {
    format!("Symptom '{}' logged successfully for today.", symptom)
}

pub struct ExecuteAssistantActionHandler {
    record_period: RecordPeriodStartHandler,
    log_symptom: LogSymptomHandler,
    clock: Arc<dyn Clock>,
}

impl ExecuteAssistantActionHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, clock: Arc<dyn Clock>, counting: DayCounting) -> Self {
        Self {
            record_period: RecordPeriodStartHandler::new(profiles.clone()),
            log_symptom: LogSymptomHandler::new(profiles, clock.clone(), counting),
            clock,
        }
    }

    /// Executes one tool call.
    pub async fn handle(&self, call: &ToolCall) -> ToolResponse {
        info!(tool = call.name(), "Executing assistant tool call");

        match self.execute(call).await {
            Ok(message) => ToolResponse::success(call, message),
            Err(err) => {
                warn!(tool = call.name(), code = %err.code, error = %err.message, "Assistant tool call failed");
                ToolResponse::failure(call, ToolResult::from_error(&err), err.message.clone())
            }
        }
    }

    /// Executes calls in order, as the model issued them.
    pub async fn handle_all(&self, calls: &[ToolCall]) -> Vec<ToolResponse> {
        let mut responses = Vec::with_capacity(calls.len());
        for call in calls {
            responses.push(self.handle(call).await);
        }
        responses
    }

    async fn execute(&self, call: &ToolCall) -> Result<String, DomainError> {
        match AssistantAction::try_from(call)? {
            AssistantAction::UpdatePeriodDate { date } => {
                let date = date.resolve(self.clock.today());
                self.record_period
                    .handle(RecordPeriodStartCommand { date })
                    .await?;
                Ok(PERIOD_UPDATED_MESSAGE.to_string())
            }
            AssistantAction::LogSymptom { symptom_name } => {
                let entry = self
                    .log_symptom
                    .handle(LogSymptomCommand {
                        symptom: symptom_name,
                    })
                    .await?;
                Ok(symptom_logged_message(entry.symptom()))
            }
        }
    }
}
