//! BuildAssistantContextHandler - seeds a new chat session.

use std::sync::Arc;
use tracing::debug;

use crate::application::handlers::load_profile;
use crate::domain::conversation::{AssistantContext, ContextLimits};
use crate::domain::foundation::DomainError;
use crate::ports::{Clock, MessageRepository, ProfileRepository};

pub struct BuildAssistantContextHandler {
    profiles: Arc<dyn ProfileRepository>,
    messages: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
    limits: ContextLimits,
}

impl BuildAssistantContextHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        messages: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
        limits: ContextLimits,
    ) -> Self {
        Self {
            profiles,
            messages,
            clock,
            limits,
        }
    }

    /// Rebuilt from storage every time, so the model sees the latest data.
    pub async fn handle(&self) -> Result<AssistantContext, DomainError> {
        let profile = load_profile(self.profiles.as_ref()).await?;
        let messages = self.messages.load_all().await?;

        let context = AssistantContext::build(&profile, self.clock.today(), &messages, self.limits);
        debug!(
            stored_messages = messages.len(),
            replayed = context.history.len(),
            "Built assistant context"
        );

        Ok(context)
    }
}
