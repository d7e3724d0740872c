//! Chat completions wire format.
//!
//! Request: `{model, messages: [{role, content}], temperature, max_tokens?,
//! functions?, function_call?}`. `functions` and `function_call` are only
//! sent when the request declares at least one function.
//!
//! Response: `{choices: [{message: {content?, function_call?: {name,
//! arguments}}}], model, usage?}`. Only the first choice is read.

use playground_application::ProviderReply;
use playground_domain::{CompletionRequest, FunctionCall, RawArguments, TokenUsage};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct ChatPayload<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage<'a>>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub functions: Vec<WireFunction<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct WireMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct WireFunction<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub parameters: &'a Value,
}

impl<'a> ChatPayload<'a> {
    pub fn from_request(request: &'a CompletionRequest) -> Self {
        let messages = request
            .turns
            .iter()
            .map(|turn| WireMessage {
                role: turn.role.as_str(),
                content: &turn.text,
            })
            .collect();

        let functions: Vec<WireFunction<'a>> = request
            .available_functions
            .iter()
            .map(|f| WireFunction {
                name: &f.name,
                description: &f.description,
                parameters: &f.parameter_schema,
            })
            .collect();

        let function_call = (!functions.is_empty()).then(|| request.function_policy.as_str());

        Self {
            model: &request.model_id,
            messages,
            temperature: request.temperature,
            max_tokens: request.max_output_tokens,
            functions,
            function_call,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub function_call: Option<WireFunctionCall>,
}

#[derive(Debug, Deserialize)]
pub struct WireFunctionCall {
    #[serde(default)]
    pub name: String,
    /// A JSON-encoded string from OpenAI; some compatible servers send an object.
    #[serde(default)]
    pub arguments: Value,
}

impl ChatResponse {
    /// The first choice as a [`ProviderReply`]; empty when there are no choices.
    pub fn into_reply(self) -> ProviderReply {
        let message = self.choices.into_iter().next().map(|c| c.message);
        let (content, function_call) = match message {
            Some(m) => (
                m.content,
                m.function_call.map(|call| {
                    FunctionCall::new(call.name, RawArguments::from_value(call.arguments))
                }),
            ),
            None => (None, None),
        };

        ProviderReply {
            content,
            function_call,
            model: self.model,
            usage: self.usage,
        }
    }
}
