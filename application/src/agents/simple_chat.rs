//! Plain chat agent: the whole conversation goes to the model, no functions.

use super::Agent;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::use_cases::complete::{CompletionClient, CompletionError};
use async_trait::async_trait;
use playground_domain::{CompletionResult, Conversation, Turn};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info};

pub struct SimpleChatAgent {
    client: Arc<CompletionClient>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl SimpleChatAgent {
    pub const NAME: &'static str = "chat";

    pub fn new(client: Arc<CompletionClient>) -> Self {
        Self {
            client,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }
}

#[async_trait]
impl Agent for SimpleChatAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "General chat with the full conversation as context"
    }

    async fn chat(&self, conversation: Conversation) -> Result<Conversation, CompletionError> {
        info!("Chat request with {} turns", conversation.len());

        let request = self.client.request(conversation.turns().to_vec());
        let text = match self.client.complete(request).await? {
            CompletionResult::Text(text) => text,
            // No functions were declared, so a call here is unusable
            CompletionResult::FunctionCall(call) => {
                debug!("Unexpected function call '{}' from chat request", call.name);
                return Err(CompletionError::MalformedResponse);
            }
        };

        self.conversation_logger.log(ConversationEvent::new(
            "assistant_turn",
            json!({ "agent": Self::NAME, "text": text }),
        ));
        Ok(conversation.with_turn(Turn::assistant(text).from_agent(Self::NAME)))
    }
}
