//! Completion transport port
//!
//! One raw request/response exchange with the text-generation service. The
//! transport performs no retries and no validation; both live in
//! [`CompletionClient`](crate::use_cases::complete::CompletionClient).

use async_trait::async_trait;
use playground_domain::{CompletionRequest, FunctionCall, TokenUsage};
use thiserror::Error;

/// Errors raised by a single transport attempt
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode response: {0}")]
    Decode(String),

    #[error("Missing API key: set {0}")]
    MissingApiKey(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// The first choice of a provider response, before validation.
///
/// Either field may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderReply {
    pub content: Option<String>,
    pub function_call: Option<FunctionCall>,
    pub model: Option<String>,
    pub usage: Option<TokenUsage>,
}

impl ProviderReply {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn call(function_call: FunctionCall) -> Self {
        Self {
            function_call: Some(function_call),
            ..Default::default()
        }
    }
}

#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn send(&self, request: &CompletionRequest) -> Result<ProviderReply, TransportError>;
}
