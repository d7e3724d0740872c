//! Chat session state shared by the REPL and one-shot mode

use playground_application::{Agent, CompletionError, DialogError, DialogStore};
use playground_domain::{Conversation, Turn};
use std::sync::Arc;
use tracing::{debug, info};

/// The active agent, the conversation so far, and the dialog it is saved under.
pub struct ChatSession {
    agent: Arc<dyn Agent>,
    conversation: Conversation,
    dialog_id: Option<String>,
}

impl ChatSession {
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        Self {
            agent,
            conversation: Conversation::new(),
            dialog_id: None,
        }
    }

    /// Continue a stored dialog.
    pub fn resume(agent: Arc<dyn Agent>, dialog_id: impl Into<String>, conversation: Conversation) -> Self {
        Self {
            agent,
            conversation,
            dialog_id: Some(dialog_id.into()),
        }
    }

    pub fn agent(&self) -> &Arc<dyn Agent> {
        &self.agent
    }

    pub fn set_agent(&mut self, agent: Arc<dyn Agent>) {
        info!("Switching agent: {} -> {}", self.agent.name(), agent.name());
        self.agent = agent;
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn dialog_id(&self) -> Option<&str> {
        self.dialog_id.as_deref()
    }

    /// Send `text` to the current agent and return its reply.
    ///
    /// The conversation only changes when the agent succeeds; on error it is
    /// left exactly as it was.
    pub async fn ask(&mut self, text: &str) -> Result<&Turn, CompletionError> {
        let request = self.conversation.clone().with_turn(Turn::user(text));
        let updated = self.agent.chat(request).await?;
        debug!(
            "Agent {} replied; conversation has {} turns",
            self.agent.name(),
            updated.len()
        );
        self.conversation = updated;
        self.conversation
            .last()
            .ok_or(CompletionError::MalformedResponse)
    }

    /// Save under the current id (or a fresh one). Empty conversations are not saved.
    pub fn save(&mut self, store: &dyn DialogStore) -> Result<Option<&str>, DialogError> {
        if self.conversation.is_empty() {
            return Ok(None);
        }
        let id = store.save(&self.conversation, self.dialog_id.as_deref())?;
        self.dialog_id = Some(id);
        Ok(self.dialog_id.as_deref())
    }

    /// Start over with an empty, unsaved conversation.
    pub fn reset(&mut self) {
        self.conversation = Conversation::new();
        self.dialog_id = None;
    }
}
