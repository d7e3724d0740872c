//! Presentation-level configuration
//!
//! Configuration for REPL behavior.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show the spinner while an agent is working
    pub show_progress: bool,
    /// Save the dialog after every successful exchange
    pub autosave: bool,
    /// Path to history file (default: `<data dir>/agent-playground/history.txt`)
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            autosave: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Configured history file with `~/` expanded, else the default location.
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => match path.strip_prefix("~") {
                Ok(rest) => dirs::home_dir().map(|home| home.join(rest)),
                Err(_) => Some(path.clone()),
            },
            None => dirs::data_dir().map(|p| p.join("agent-playground").join("history.txt")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReplConfig::default();
        assert!(config.show_progress);
        assert!(config.autosave);
    }

    #[test]
    fn test_explicit_history_path() {
        let config = ReplConfig {
            history_file: Some(PathBuf::from("/tmp/history.txt")),
            ..Default::default()
        };
        assert_eq!(config.history_path(), Some(PathBuf::from("/tmp/history.txt")));
    }

    #[test]
    fn test_home_relative_history_path() {
        let config = ReplConfig {
            history_file: Some(PathBuf::from("~/.playground_history")),
            ..Default::default()
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.history_path(), Some(home.join(".playground_history")));
        }
    }
}
