//! Assistant tools - the only way the chat model can change tracked data.
//!
//! The model sees a fixed set of declared tools. Each call it makes is
//! parsed into a typed [`AssistantAction`], executed by the application
//! layer, and answered with a [`ToolResponse`] carrying plain text.
//!
//! ## Key Types
//!
//! - [`ToolDefinition`] - Schema and metadata for a tool
//! - [`ToolRegistry`] - Declared tools in a stable order
//! - [`ToolCall`] - Request to invoke a tool
//! - [`AssistantAction`] - Validated, typed form of a call
//! - [`ToolResponse`] - Result returned to the model
//! - [`ToolResult`] - Outcome category of an execution

mod action;
pub mod definitions;
mod tool_call;
mod tool_definition;
mod tool_registry;
mod tool_result;

pub use action::{AssistantAction, DateArg};
pub use definitions::assistant_tools;
pub use tool_call::{ToolCall, ToolResponse};
pub use tool_definition::ToolDefinition;
pub use tool_registry::ToolRegistry;
pub use tool_result::ToolResult;
