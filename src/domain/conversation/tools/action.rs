//! Typed actions parsed from tool calls.
//!
//! The model only ever talks to the engine through these: a tool call is
//! validated into an [`AssistantAction`] before anything touches the profile.

use super::definitions::{LOG_SYMPTOM, TODAY, UPDATE_PERIOD_DATE};
use super::ToolCall;
use crate::domain::foundation::{CalendarDate, DomainError, ErrorCode, ValidationError};

/// A date argument as the model sent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateArg {
    Today,
    On(CalendarDate),
}

impl DateArg {
    /// Parses `"today"` (any case) or an ISO `YYYY-MM-DD` date.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(TODAY) {
            return Ok(Self::Today);
        }
        CalendarDate::parse_iso(trimmed).map(Self::On)
    }

    /// Pins `Today` to a concrete date.
    pub fn resolve(self, today: CalendarDate) -> CalendarDate {
        match self {
            Self::Today => today,
            Self::On(date) => date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantAction {
    UpdatePeriodDate { date: DateArg },
    LogSymptom { symptom_name: String },
}

impl AssistantAction {
    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::UpdatePeriodDate { .. } => UPDATE_PERIOD_DATE,
            Self::LogSymptom { .. } => LOG_SYMPTOM,
        }
    }
}

impl TryFrom<&ToolCall> for AssistantAction {
    type Error = DomainError;

    fn try_from(call: &ToolCall) -> Result<Self, Self::Error> {
        match call.name() {
            UPDATE_PERIOD_DATE => {
                let raw = required_str(call, "date")?;
                Ok(Self::UpdatePeriodDate {
                    date: DateArg::parse(raw)?,
                })
            }
            LOG_SYMPTOM => {
                let raw = required_str(call, "symptomName")?;
                let symptom_name = raw.trim();
                if symptom_name.is_empty() {
                    return Err(ValidationError::empty_field("symptomName").into());
                }
                Ok(Self::LogSymptom {
                    symptom_name: symptom_name.to_string(),
                })
            }
            other => Err(DomainError::new(
                ErrorCode::UnknownTool,
                format!("Unknown tool: {}", other),
            )
            .with_detail("tool", other)),
        }
    }
}

fn required_str<'a>(call: &'a ToolCall, key: &str) -> Result<&'a str, DomainError> {
    call.str_param(key).ok_or_else(|| {
        DomainError::validation(key, format!("Missing string parameter '{}'", key))
            .with_detail("tool", call.name())
    })
}
