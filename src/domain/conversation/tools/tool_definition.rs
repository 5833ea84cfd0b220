//! Tool definition - schema and metadata for a tool.
//!
//! Defines the interface for a tool that the chat model can invoke.

use serde::{Deserialize, Serialize};

/// Definition of a tool the chat model may call.
///
/// Contains the schema needed for:
/// - declaring the tool to the model provider
/// - validating parameters before execution
///
/// # Examples
///
/// ```
/// use sakhi::domain::conversation::tools::ToolDefinition;
///
/// let definition = ToolDefinition::new(
///     "logSymptom",
///     "Log a health symptom reported by the user",
///     serde_json::json!({
///         "type": "object",
///         "required": ["symptomName"],
///         "properties": {
///             "symptomName": { "type": "string" }
///         }
///     }),
/// );
/// assert_eq!(definition.required_parameters(), vec!["symptomName"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool (e.g., "updatePeriodDate")
    name: String,

    /// Human-readable description for the model
    description: String,

    /// JSON Schema for the parameters
    parameters_schema: serde_json::Value,
}

impl ToolDefinition {
    /// Creates a new tool definition.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters_schema,
        }
    }

    /// Returns the tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the parameters schema.
    pub fn parameters_schema(&self) -> &serde_json::Value {
        &self.parameters_schema
    }

    /// Names listed under the schema's `required` key.
    pub fn required_parameters(&self) -> Vec<&str> {
        self.parameters_schema["required"]
            .as_array()
            .map(|names| names.iter().filter_map(|n| n.as_str()).collect())
            .unwrap_or_default()
    }

    /// Converts to Gemini function declaration format.
    pub fn to_gemini_format(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "parameters": self.parameters_schema
        })
    }

    /// Converts to OpenAI tool format.
    pub fn to_openai_format(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": self.parameters_schema
            }
        })
    }

    /// Converts to Anthropic tool format.
    pub fn to_anthropic_format(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "description": self.description,
            "input_schema": self.parameters_schema
        })
    }
}
