//! Application layer for agent-playground
//!
//! This crate contains the agents, the retrying completion client, port
//! definitions and application configuration. It depends only on the domain
//! layer.

pub mod agents;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use agents::{
    Agent, catalog::AgentCatalog, echo::EchoAgent, simple_chat::SimpleChatAgent,
    supporter::SupporterAgent,
};
pub use config::CompletionSettings;
pub use ports::{
    completion_transport::{CompletionTransport, ProviderReply, TransportError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    dialog_store::{DialogError, DialogStore, DialogSummary},
    sleeper::{Sleeper, TokioSleeper},
    sub_handler::SubHandler,
};
pub use use_cases::complete::{CompletionClient, CompletionError, MAX_RETRIES, backoff_delay};
