//! Conversation module - the boundary with the external chat assistant.
//!
//! - `message` - persisted chat history
//! - `context` - system instruction and history for a new session
//! - `tools` - declared tool calls and their typed actions

mod context;
mod message;
pub mod tools;

pub use context::{recent_symptom_summary, AssistantContext, ContextLimits, HistoryTurn, SYSTEM_INSTRUCTION};
pub use message::{ChatMessage, Role};
