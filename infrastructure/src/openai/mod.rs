//! OpenAI-compatible chat completions adapter.
//!
//! Implements the [`CompletionTransport`](playground_application::CompletionTransport)
//! port over `POST {base_url}/v1/chat/completions` using the legacy
//! `functions` / `function_call` fields.
//!
//! - [`wire`]: request payload and response body types
//! - [`transport`]: the reqwest-based transport
//! - [`error`]: adapter errors and their mapping into `TransportError`

pub mod error;
pub mod transport;
pub mod wire;

pub use error::OpenAiError;
pub use transport::{OpenAiSettings, OpenAiTransport};
