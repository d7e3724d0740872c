use super::Agent;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::use_cases::complete::CompletionError;
use async_trait::async_trait;
use playground_domain::{Conversation, Turn};
use serde_json::json;
use std::sync::Arc;

/// Offline agent that repeats the last user message.
pub struct EchoAgent {
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl EchoAgent {
    pub const NAME: &'static str = "echo";

    pub fn new() -> Self {
        Self {
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }
}

impl Default for EchoAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Agent for EchoAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Repeats your last message (no network)"
    }

    async fn chat(&self, conversation: Conversation) -> Result<Conversation, CompletionError> {
        let text = format!("Echo: {}", conversation.last_user_text().unwrap_or_default());
        self.conversation_logger.log(ConversationEvent::new(
            "assistant_turn",
            json!({ "agent": Self::NAME, "text": text }),
        ));
        Ok(conversation.with_turn(Turn::assistant(text).from_agent(Self::NAME)))
    }
}
