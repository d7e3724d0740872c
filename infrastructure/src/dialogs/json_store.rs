//! JSON file dialog store.
//!
//! One pretty-printed file per dialog at `<directory>/<dialog_id>.json`:
//!
//! ```json
//! {
//!   "dialog_id": "20250101_120000",
//!   "created_at": "2025-01-01T12:00:00.123+01:00",
//!   "messages": [{"role": "user", "text": "hi"}]
//! }
//! ```

use chrono::{DateTime, Local};
use playground_application::{DialogError, DialogStore, DialogSummary};
use playground_domain::{Conversation, Turn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Serialize, Deserialize)]
struct DialogFile {
    #[serde(default)]
    dialog_id: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    messages: Vec<Turn>,
}

/// [`DialogStore`] writing one JSON file per dialog.
pub struct JsonDialogStore {
    directory: PathBuf,
}

impl JsonDialogStore {
    /// Open the store, creating `directory` if needed.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, DialogError> {
        let directory = directory.into();
        fs::create_dir_all(&directory)?;
        Ok(Self { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// A fresh id from the local clock, `%Y%m%d_%H%M%S`.
    ///
    /// Second resolution: two saves of new dialogs within the same second
    /// share an id and the later one overwrites the earlier file.
    pub fn new_dialog_id() -> String {
        Local::now().format("%Y%m%d_%H%M%S").to_string()
    }

    fn path_for(&self, dialog_id: &str) -> Result<PathBuf, DialogError> {
        let invalid = dialog_id.trim().is_empty()
            || dialog_id.contains(['/', '\\'])
            || dialog_id.contains("..");
        if invalid {
            return Err(DialogError::InvalidId(dialog_id.to_string()));
        }
        Ok(self.directory.join(format!("{dialog_id}.json")))
    }

    fn read(&self, path: &Path, dialog_id: &str) -> Result<Option<DialogFile>, DialogError> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| DialogError::Corrupt {
                id: dialog_id.to_string(),
                message: e.to_string(),
            })
    }

    fn summarize(file: &DialogFile, fallback_id: &str, path: &Path) -> DialogSummary {
        DialogSummary {
            dialog_id: file
                .dialog_id
                .clone()
                .unwrap_or_else(|| fallback_id.to_string()),
            created_at: file
                .created_at
                .as_deref()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok()),
            turn_count: file.messages.len(),
            location: path.display().to_string(),
        }
    }
}

impl DialogStore for JsonDialogStore {
    fn save(
        &self,
        conversation: &Conversation,
        dialog_id: Option<&str>,
    ) -> Result<String, DialogError> {
        let dialog_id = dialog_id
            .map(str::to_string)
            .unwrap_or_else(Self::new_dialog_id);
        let path = self.path_for(&dialog_id)?;

        let file = DialogFile {
            dialog_id: Some(dialog_id.clone()),
            created_at: Some(Local::now().to_rfc3339()),
            messages: conversation.turns().to_vec(),
        };
        fs::write(&path, serde_json::to_string_pretty(&file)?)?;
        debug!("Saved dialog {} ({} turns)", dialog_id, file.messages.len());
        Ok(dialog_id)
    }

    fn load(&self, dialog_id: &str) -> Result<Option<Conversation>, DialogError> {
        let path = self.path_for(dialog_id)?;
        Ok(self
            .read(&path, dialog_id)?
            .map(|file| Conversation::from_turns(file.messages)))
    }

    fn list(&self) -> Result<Vec<DialogSummary>, DialogError> {
        let mut summaries = Vec::new();
        for entry in fs::read_dir(&self.directory)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match self.read(&path, stem) {
                Ok(Some(file)) => summaries.push(Self::summarize(&file, stem, &path)),
                Ok(None) => {}
                Err(e) => warn!("Skipping unreadable dialog {}: {}", path.display(), e),
            }
        }
        // Newest first; undated dialogs last
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    fn delete(&self, dialog_id: &str) -> Result<bool, DialogError> {
        let path = self.path_for(dialog_id)?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        Ok(true)
    }

    fn info(&self, dialog_id: &str) -> Result<Option<DialogSummary>, DialogError> {
        let path = self.path_for(dialog_id)?;
        Ok(self
            .read(&path, dialog_id)?
            .map(|file| Self::summarize(&file, dialog_id, &path)))
    }
}
