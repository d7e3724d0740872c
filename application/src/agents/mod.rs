//! Conversational agents.
//!
//! Every agent implements the single [`Agent`] capability: take the whole
//! conversation, return it with exactly one new trailing turn.

pub mod catalog;
pub mod echo;
pub mod simple_chat;
pub mod supporter;

use crate::use_cases::complete::CompletionError;
use async_trait::async_trait;
use playground_domain::Conversation;

#[async_trait]
pub trait Agent: Send + Sync {
    /// Identifier used for lookup and as `origin_agent` on replies.
    fn name(&self) -> &str;

    /// One-line description for listings.
    fn description(&self) -> &str;

    /// Append exactly one reply turn to `conversation`.
    async fn chat(&self, conversation: Conversation) -> Result<Conversation, CompletionError>;
}
