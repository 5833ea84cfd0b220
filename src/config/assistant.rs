//! Assistant context configuration

use serde::Deserialize;

use super::ValidationError;
use crate::domain::conversation::ContextLimits;

const MAX_MESSAGE_WINDOW: usize = 100;
const MAX_RECENT_SYMPTOMS: usize = 20;

/// How much history seeds a new chat session
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AssistantConfig {
    /// Number of most recent messages replayed to the model
    #[serde(default = "default_message_window")]
    pub message_window: usize,

    /// Number of recent symptoms summarized in the system instruction
    #[serde(default = "default_recent_symptoms")]
    pub recent_symptoms: usize,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            message_window: default_message_window(),
            recent_symptoms: default_recent_symptoms(),
        }
    }
}

fn default_message_window() -> usize {
    15
}

fn default_recent_symptoms() -> usize {
    5
}

impl AssistantConfig {
    pub fn limits(&self) -> ContextLimits {
        ContextLimits {
            message_window: self.message_window,
            recent_symptoms: self.recent_symptoms,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=MAX_MESSAGE_WINDOW).contains(&self.message_window) {
            return Err(ValidationError::InvalidMessageWindow {
                max: MAX_MESSAGE_WINDOW,
                actual: self.message_window,
            });
        }
        if !(1..=MAX_RECENT_SYMPTOMS).contains(&self.recent_symptoms) {
            return Err(ValidationError::InvalidRecentSymptoms {
                max: MAX_RECENT_SYMPTOMS,
                actual: self.recent_symptoms,
            });
        }
        Ok(())
    }
}
