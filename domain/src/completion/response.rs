//! Completion result types.
//!
//! A well-formed completion is exactly one of:
//!
//! ```text
//! Text(String)                - the model answered directly
//! FunctionCall { name, args } - the model wants a named capability invoked
//! ```
//!
//! Function-call arguments arrive either as a JSON-encoded string or as an
//! already-structured object depending on the provider, so they are kept as
//! [`RawArguments`] until the routing boundary resolves them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Function-call arguments exactly as the provider returned them.
///
/// # Examples
///
/// ```
/// use playground_domain::RawArguments;
///
/// let encoded = RawArguments::Encoded(r#"{"location": "Tokyo"}"#.to_string());
/// assert_eq!(encoded.resolve().unwrap()["location"], "Tokyo");
///
/// let broken = RawArguments::Encoded("{not json".to_string());
/// assert!(broken.resolve().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RawArguments {
    /// JSON text that still needs parsing.
    Encoded(String),
    /// Arguments already decoded into a JSON object.
    Structured(Map<String, Value>),
}

impl RawArguments {
    /// Wrap a provider value: strings stay encoded, objects are structured.
    ///
    /// `null` is treated as an empty argument object. Any other JSON value is
    /// kept as its encoded text so that resolution reports it as invalid.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => RawArguments::Encoded(s),
            Value::Object(map) => RawArguments::Structured(map),
            Value::Null => RawArguments::Structured(Map::new()),
            other => RawArguments::Encoded(other.to_string()),
        }
    }

    /// Resolve into a JSON object, parsing encoded text if necessary.
    pub fn resolve(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match self {
            RawArguments::Encoded(text) => serde_json::from_str(text),
            RawArguments::Structured(map) => Ok(map.clone()),
        }
    }
}

impl Default for RawArguments {
    fn default() -> Self {
        RawArguments::Structured(Map::new())
    }
}

/// A function-call directive returned by the model
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: RawArguments,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, arguments: RawArguments) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Convenience constructor for structured arguments.
    pub fn structured(name: impl Into<String>, arguments: Value) -> Self {
        Self::new(name, RawArguments::from_value(arguments))
    }
}

/// Normalized outcome of a successful completion call
#[derive(Debug, Clone, PartialEq)]
pub enum CompletionResult {
    Text(String),
    FunctionCall(FunctionCall),
}

impl CompletionResult {
    pub fn text(text: impl Into<String>) -> Self {
        CompletionResult::Text(text.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CompletionResult::Text(text) => Some(text),
            CompletionResult::FunctionCall(_) => None,
        }
    }

    pub fn function_call(&self) -> Option<&FunctionCall> {
        match self {
            CompletionResult::FunctionCall(call) => Some(call),
            CompletionResult::Text(_) => None,
        }
    }
}

/// Token accounting reported by the provider, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}
