//! Dialog persistence port
//!
//! Saves conversations under a dialog identifier. The agents never touch this
//! port; only the front end does.

use chrono::{DateTime, FixedOffset};
use playground_domain::Conversation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DialogError {
    #[error("Invalid dialog id: {0:?}")]
    InvalidId(String),

    #[error("Corrupt dialog {id}: {message}")]
    Corrupt { id: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Metadata about a stored dialog, without its turns
#[derive(Debug, Clone, PartialEq)]
pub struct DialogSummary {
    pub dialog_id: String,
    /// `None` when the stored timestamp is missing or unreadable.
    pub created_at: Option<DateTime<FixedOffset>>,
    pub turn_count: usize,
    pub location: String,
}

pub trait DialogStore: Send + Sync {
    /// Save under `dialog_id`, or under a fresh id when `None`. Returns the id.
    fn save(
        &self,
        conversation: &Conversation,
        dialog_id: Option<&str>,
    ) -> Result<String, DialogError>;

    /// `Ok(None)` when no dialog has this id.
    fn load(&self, dialog_id: &str) -> Result<Option<Conversation>, DialogError>;

    /// All readable dialogs, newest first. Unreadable files are skipped.
    fn list(&self) -> Result<Vec<DialogSummary>, DialogError>;

    /// Returns false when there was nothing to delete.
    fn delete(&self, dialog_id: &str) -> Result<bool, DialogError>;

    fn info(&self, dialog_id: &str) -> Result<Option<DialogSummary>, DialogError>;
}
