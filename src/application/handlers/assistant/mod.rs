//! Assistant handlers: tool execution, session context and chat history.

mod append_messages;
mod build_assistant_context;
mod execute_assistant_action;

pub use append_messages::{AppendMessagesCommand, AppendMessagesHandler};
pub use build_assistant_context::BuildAssistantContextHandler;
pub use execute_assistant_action::{
    symptom_logged_message, ExecuteAssistantActionHandler, PERIOD_UPDATED_MESSAGE,
};
