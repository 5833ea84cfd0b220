//! Session context handed to the external chat model.
//!
//! The context is rebuilt from the current profile on every session start
//! so the model always sees the latest cycle data.

use serde::Serialize;

use super::ChatMessage;
use crate::domain::foundation::CalendarDate;
use crate::domain::profile::UserProfile;

/// Persona and guidelines for the assistant.
pub const SYSTEM_INSTRUCTION: &str = "\
You are \"Sakhi\" (सखी), a friendly women's health companion for Indian women. \
You help users track their menstrual cycle, share daily tips for their cycle phase, \
and suggest immediate relief for symptoms.

PERSONALITY & TONE:
- Warm, caring and supportive, like a trusted female friend
- Reply in the user's preferred language (English, Hindi, Telugu, Tamil, Kannada); \
mixing in English medical terms is fine when natural
- Empathetic, non-judgmental and encouraging
- Use emojis moderately

CORE CAPABILITIES:
1. Period tracking: give insights based on the user's cycle day.
2. Daily health tips: adapt to the cycle phase and to vegetarian/non-vegetarian diet.
3. Symptom relief: acknowledge discomfort, give 3-4 home remedies, say when to see a doctor.

GUIDELINES:
- Keep responses short (2-4 lines).
- Use bullet points for readability.
- Never give a medical diagnosis.";

/// How much history to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextLimits {
    pub message_window: usize,
    pub recent_symptoms: usize,
}

impl Default for ContextLimits {
    fn default() -> Self {
        Self {
            message_window: 15,
            recent_symptoms: 5,
        }
    }
}

/// One prior message in the model's history format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryTurn {
    pub role: &'static str,
    pub text: String,
}

/// System instruction plus replayed history for a new chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantContext {
    pub system_instruction: String,
    pub history: Vec<HistoryTurn>,
}

impl AssistantContext {
    /// Builds the context for `profile` as of `today`.
    pub fn build(
        profile: &UserProfile,
        today: CalendarDate,
        messages: &[ChatMessage],
        limits: ContextLimits,
    ) -> Self {
        Self {
            system_instruction: format!(
                "{}\n\n{}",
                SYSTEM_INSTRUCTION,
                user_context(profile, today, limits.recent_symptoms)
            ),
            history: recent_history(messages, limits.message_window),
        }
    }
}

fn user_context(profile: &UserProfile, today: CalendarDate, recent_symptoms: usize) -> String {
    format!(
        "CURRENT USER CONTEXT:\n\
         - Last Period Date: {}\n\
         - Cycle Length: {} days\n\
         - Diet: {}\n\
         - Preferred Language: {}\n\
         - Recent Symptoms: {}\n\
         - Today's Date: {}\n\n\
         If the user reports a symptom, acknowledge it, give advice, and log it with the logSymptom tool.\n\
         If the user says their period started, record it with the updatePeriodDate tool.\n\
         If the user sends a voice message, keep your response concise.",
        profile.last_period_date(),
        profile.cycle_length().days(),
        profile.diet_preference(),
        profile.language().label(),
        recent_symptom_summary(profile, recent_symptoms),
        today.to_display(),
    )
}

/// `"Cramps (Day 2), Headache (Day ?)"`, or a placeholder when empty.
pub fn recent_symptom_summary(profile: &UserProfile, limit: usize) -> String {
    let recent: Vec<String> = profile
        .symptom_history()
        .iter()
        .take(limit)
        .map(|entry| match entry.cycle_day() {
            Some(day) => format!("{} (Day {})", entry.symptom(), day),
            None => format!("{} (Day ?)", entry.symptom()),
        })
        .collect();

    if recent.is_empty() {
        "None logged yet".to_string()
    } else {
        recent.join(", ")
    }
}

fn recent_history(messages: &[ChatMessage], window: usize) -> Vec<HistoryTurn> {
    let with_content: Vec<&ChatMessage> = messages.iter().filter(|m| m.has_content()).collect();
    let start = with_content.len().saturating_sub(window);

    with_content[start..]
        .iter()
        .map(|m| HistoryTurn {
            role: m.role().model_role(),
            text: m.text().to_string(),
        })
        .collect()
}
