//! Error types for the OpenAI adapter

use playground_application::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No API key found; set {0} or openai.api_key")]
    MissingApiKey(String),
}

impl From<OpenAiError> for TransportError {
    fn from(err: OpenAiError) -> Self {
        match err {
            OpenAiError::Http(e) if e.is_timeout() => TransportError::Timeout,
            OpenAiError::Http(e) if e.is_decode() => TransportError::Decode(e.to_string()),
            OpenAiError::Http(e) => TransportError::Connection(e.to_string()),
            OpenAiError::Status { status, body } => TransportError::Status { status, body },
            OpenAiError::Parse(e) => TransportError::Decode(e.to_string()),
            OpenAiError::MissingApiKey(var) => TransportError::MissingApiKey(var),
        }
    }
}
