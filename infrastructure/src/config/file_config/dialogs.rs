//! Dialog storage configuration from TOML (`[dialogs]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDialogsConfig {
    /// Directory holding one JSON file per dialog
    pub directory: String,
    /// Save after every successful exchange
    pub autosave: bool,
}

impl Default for FileDialogsConfig {
    fn default() -> Self {
        Self {
            directory: "dialog_cache".to_string(),
            autosave: true,
        }
    }
}
