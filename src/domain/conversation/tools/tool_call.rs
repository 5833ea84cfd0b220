//! Tool call and response types.
//!
//! These are the request/response value objects crossing the assistant
//! boundary: the model emits a call, the engine answers with a response
//! whose text is relayed back to the model.

use serde::{Deserialize, Serialize};

use super::ToolResult;

/// A request from the chat model to invoke a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Provider-assigned call id, echoed back in the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    /// Name of the tool to invoke
    name: String,

    /// Parameters for the tool (JSON object)
    #[serde(default)]
    parameters: serde_json::Value,
}

impl ToolCall {
    /// Creates a new tool call.
    pub fn new(name: impl Into<String>, parameters: serde_json::Value) -> Self {
        Self {
            id: None,
            name: name.into(),
            parameters,
        }
    }

    /// Attaches the provider's call id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns the call id, if the provider sent one.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parameters.
    pub fn parameters(&self) -> &serde_json::Value {
        &self.parameters
    }

    /// Reads a string parameter.
    pub fn str_param(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).and_then(|v| v.as_str())
    }
}

/// Outcome of executing a tool call.
///
/// `message` is always set: on success it confirms what was recorded, on
/// failure it explains why, so the model can tell the user either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    call_id: Option<String>,
    name: String,
    result: ToolResult,
    message: String,
}

impl ToolResponse {
    /// Creates a successful response.
    pub fn success(call: &ToolCall, message: impl Into<String>) -> Self {
        Self {
            call_id: call.id.clone(),
            name: call.name.clone(),
            result: ToolResult::Success,
            message: message.into(),
        }
    }

    /// Creates a failed response.
    pub fn failure(call: &ToolCall, result: ToolResult, message: impl Into<String>) -> Self {
        Self {
            call_id: call.id.clone(),
            name: call.name.clone(),
            result,
            message: message.into(),
        }
    }

    /// Returns whether the tool succeeded.
    pub fn is_success(&self) -> bool {
        self.result.is_success()
    }

    pub fn result(&self) -> ToolResult {
        self.result
    }

    /// Text relayed to the model.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Function-response part sent back to the model.
    pub fn to_function_response(&self) -> serde_json::Value {
        let key = if self.is_success() { "result" } else { "error" };
        serde_json::json!({
            "functionResponse": {
                "name": self.name,
                "id": self.call_id,
                "response": { key: self.message }
            }
        })
    }
}
