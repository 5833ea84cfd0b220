//! AppendMessagesHandler - stores one chat exchange.

use std::sync::Arc;
use tracing::debug;

use crate::domain::conversation::{ChatMessage, Role};
use crate::domain::foundation::DomainError;
use crate::ports::MessageRepository;

#[derive(Debug, Clone)]
pub struct AppendMessagesCommand {
    pub messages: Vec<(Role, String)>,
}

impl AppendMessagesCommand {
    /// A user message followed by the assistant's reply.
    pub fn exchange(user_text: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            messages: vec![(Role::User, user_text.into()), (Role::Assistant, reply.into())],
        }
    }
}

pub struct AppendMessagesHandler {
    messages: Arc<dyn MessageRepository>,
}

impl AppendMessagesHandler {
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    /// Validates every message first; nothing is written if one is blank.
    pub async fn handle(&self, cmd: AppendMessagesCommand) -> Result<Vec<ChatMessage>, DomainError> {
        let messages = cmd
            .messages
            .into_iter()
            .map(|(role, text)| ChatMessage::new(role, text))
            .collect::<Result<Vec<_>, _>>()?;

        self.messages.append(&messages).await?;
        debug!(count = messages.len(), "Appended chat messages");

        Ok(messages)
    }
}
