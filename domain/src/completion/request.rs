//! Outbound completion request

use crate::conversation::entities::Turn;
use serde::{Deserialize, Serialize};

/// A capability the model may ask to invoke (Value Object)
///
/// Declared once per agent and never mutated. `parameter_schema` is a JSON
/// Schema object describing the arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSpec {
    pub name: String,
    pub description: String,
    pub parameter_schema: serde_json::Value,
}

impl FunctionSpec {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameter_schema: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameter_schema,
        }
    }
}

/// Whether the model may choose to call a declared function
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FunctionPolicy {
    #[default]
    None,
    Auto,
}

impl FunctionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionPolicy::None => "none",
            FunctionPolicy::Auto => "auto",
        }
    }
}

/// A single request to the text-generation service
///
/// Short-lived: built, sent and dropped inside one `chat()` call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model_id: String,
    pub turns: Vec<Turn>,
    pub temperature: f32,
    pub max_output_tokens: Option<u32>,
    pub available_functions: Vec<FunctionSpec>,
    pub function_policy: FunctionPolicy,
}

impl CompletionRequest {
    pub fn new(model_id: impl Into<String>, turns: Vec<Turn>, temperature: f32) -> Self {
        Self {
            model_id: model_id.into(),
            turns,
            temperature,
            max_output_tokens: None,
            available_functions: Vec::new(),
            function_policy: FunctionPolicy::None,
        }
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: Option<u32>) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Declare functions the model may call, with the given policy.
    pub fn with_functions(mut self, functions: Vec<FunctionSpec>, policy: FunctionPolicy) -> Self {
        self.available_functions = functions;
        self.function_policy = policy;
        self
    }

    /// True when function declarations should be sent with this request.
    pub fn has_functions(&self) -> bool {
        !self.available_functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_has_no_functions() {
        let request = CompletionRequest::new("gpt-4.1", vec![Turn::user("hi")], 0.7);
        assert!(!request.has_functions());
        assert_eq!(request.function_policy, FunctionPolicy::None);
        assert_eq!(request.max_output_tokens, None);
    }

    #[test]
    fn test_with_functions_sets_policy() {
        let spec = FunctionSpec::new("f", "does f", serde_json::json!({"type": "object"}));
        let request = CompletionRequest::new("m", vec![], 0.0)
            .with_functions(vec![spec], FunctionPolicy::Auto)
            .with_max_output_tokens(Some(256));
        assert!(request.has_functions());
        assert_eq!(request.function_policy.as_str(), "auto");
        assert_eq!(request.max_output_tokens, Some(256));
    }
}
