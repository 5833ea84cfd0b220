//! Tool Registry - the set of tools declared to the chat model.
//!
//! # Example
//!
//! ```
//! use sakhi::domain::conversation::tools::{ToolDefinition, ToolRegistry};
//!
//! let mut registry = ToolRegistry::new();
//! registry.register(ToolDefinition::new(
//!     "logSymptom",
//!     "Log a health symptom",
//!     serde_json::json!({"type": "object"}),
//! ));
//!
//! assert!(registry.has_tool("logSymptom"));
//! assert_eq!(registry.len(), 1);
//! ```

use std::collections::HashMap;

use super::ToolDefinition;

/// Registry of tool definitions keyed by name.
///
/// Registration order is preserved so the declaration sent to the model
/// is stable between sessions.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, ToolDefinition>,
    order: Vec<String>,
}

impl ToolRegistry {
    /// Creates a new empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool, replacing any previous definition with the same name.
    pub fn register(&mut self, definition: ToolDefinition) {
        let name = definition.name().to_string();
        if !self.tools.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.tools.insert(name, definition);
    }

    /// Looks up a tool by name.
    pub fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// All definitions in registration order.
    pub fn definitions(&self) -> Vec<&ToolDefinition> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .collect()
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Gemini `tools` payload: one entry holding every function declaration.
    pub fn to_gemini_tools(&self) -> serde_json::Value {
        let declarations: Vec<_> = self
            .definitions()
            .into_iter()
            .map(ToolDefinition::to_gemini_format)
            .collect();
        serde_json::json!([{ "functionDeclarations": declarations }])
    }

    pub fn to_openai_tools(&self) -> Vec<serde_json::Value> {
        self.definitions()
            .into_iter()
            .map(ToolDefinition::to_openai_format)
            .collect()
    }

    pub fn to_anthropic_tools(&self) -> Vec<serde_json::Value> {
        self.definitions()
            .into_iter()
            .map(ToolDefinition::to_anthropic_format)
            .collect()
    }
}
