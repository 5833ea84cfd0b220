//! The two tools the assistant may call to change tracked data.

use once_cell::sync::Lazy;

use super::{ToolDefinition, ToolRegistry};

pub const UPDATE_PERIOD_DATE: &str = "updatePeriodDate";
pub const LOG_SYMPTOM: &str = "logSymptom";

/// Date value the model may send instead of a calendar date.
pub const TODAY: &str = "today";

static ASSISTANT_TOOLS: Lazy<ToolRegistry> = Lazy::new(|| {
    let mut registry = ToolRegistry::new();
    registry.register(update_period_date());
    registry.register(log_symptom());
    registry
});

/// Registry declared to the chat model on every session.
pub fn assistant_tools() -> &'static ToolRegistry {
    &ASSISTANT_TOOLS
}

fn update_period_date() -> ToolDefinition {
    ToolDefinition::new(
        UPDATE_PERIOD_DATE,
        "Update the user's last period start date when they say their period started.",
        serde_json::json!({
            "type": "object",
            "required": ["date"],
            "properties": {
                "date": {
                    "type": "string",
                    "description": "The date in YYYY-MM-DD format, or 'today'"
                }
            }
        }),
    )
}

fn log_symptom() -> ToolDefinition {
    ToolDefinition::new(
        LOG_SYMPTOM,
        "Log a health symptom reported by the user (e.g., cramps, headache, bloating).",
        serde_json::json!({
            "type": "object",
            "required": ["symptomName"],
            "properties": {
                "symptomName": {
                    "type": "string",
                    "description": "Name of the symptom"
                }
            }
        }),
    )
}
