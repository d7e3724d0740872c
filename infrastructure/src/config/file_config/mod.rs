//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section is `#[serde(default)]`, so any subset may be given.

mod dialogs;
mod logging;
mod openai;
mod repl;

pub use dialogs::FileDialogsConfig;
pub use logging::FileLoggingConfig;
pub use openai::FileOpenAiConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion endpoint and model settings
    pub openai: FileOpenAiConfig,
    /// Dialog storage
    pub dialogs: FileDialogsConfig,
    /// Transcript and diagnostic log files
    pub logging: FileLoggingConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

/// A questionable configuration value. Reported, never fatal.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub field: &'static str,
    pub message: String,
}

impl ConfigIssue {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let openai = &self.openai;

        if openai.model.trim().is_empty() {
            issues.push(ConfigIssue::new("openai.model", "model name cannot be empty"));
        }
        if !(0.0..=2.0).contains(&openai.temperature) {
            issues.push(ConfigIssue::new(
                "openai.temperature",
                format!("{} is outside 0.0..=2.0", openai.temperature),
            ));
        }
        if openai.timeout_seconds == Some(0) {
            issues.push(ConfigIssue::new(
                "openai.timeout_seconds",
                "timeout_seconds cannot be 0",
            ));
        }
        if openai.max_tokens == Some(0) {
            issues.push(ConfigIssue::new("openai.max_tokens", "max_tokens cannot be 0"));
        }
        if self.dialogs.directory.trim().is_empty() {
            issues.push(ConfigIssue::new(
                "dialogs.directory",
                "directory cannot be empty",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[openai]
api_key_env = "MY_KEY"
base_url = "http://localhost:8080"
model = "gpt-4.1"
temperature = 0.2
max_tokens = 512
timeout_seconds = 30

[dialogs]
directory = "/tmp/dialogs"
autosave = false

[logging]
conversation_log = "routing.jsonl"
file = "playground.log"

[repl]
default_agent = "chat"
history_file = "~/.playground_history"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.openai.api_key_env, "MY_KEY");
        assert_eq!(config.openai.model, "gpt-4.1");
        assert_eq!(config.openai.temperature, 0.2);
        assert_eq!(config.openai.max_tokens, Some(512));
        assert_eq!(config.openai.timeout_seconds, Some(30));
        assert!(!config.dialogs.autosave);
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some("routing.jsonl")
        );
        assert_eq!(config.repl.default_agent, "chat");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: FileConfig = toml::from_str("[openai]\nmodel = \"gpt-4o\"\n").unwrap();
        assert_eq!(config.openai.model, "gpt-4o");
        // Defaults should apply
        assert_eq!(config.openai.temperature, 0.7);
        assert_eq!(config.openai.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.dialogs.directory, "dialog_cache");
        assert!(config.dialogs.autosave);
        assert_eq!(config.repl.default_agent, "supporter");
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.openai.model, "gpt-3.5-turbo");
        assert_eq!(config.openai.base_url, "https://api.openai.com");
        assert!(config.logging.conversation_log.is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_has_no_timeout() {
        let config = FileConfig::default();
        assert_eq!(config.openai.timeout_seconds, None);
        assert_eq!(config.openai.to_transport_settings().timeout, None);
    }

    #[test]
    fn test_timeout_converts_to_duration() {
        let mut config = FileConfig::default();
        config.openai.timeout_seconds = Some(45);
        assert_eq!(
            config.openai.to_transport_settings().timeout,
            Some(std::time::Duration::from_secs(45))
        );
    }

    #[test]
    fn test_completion_settings() {
        let mut config = FileConfig::default();
        config.openai.max_tokens = Some(100);
        let settings = config.openai.to_completion_settings();
        assert_eq!(settings.model, "gpt-3.5-turbo");
        assert_eq!(settings.max_output_tokens, Some(100));
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.openai.model = " ".to_string();
        config.openai.temperature = 3.5;
        config.openai.timeout_seconds = Some(0);
        config.openai.max_tokens = Some(0);

        let fields: Vec<&str> = config.validate().iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec![
                "openai.model",
                "openai.temperature",
                "openai.timeout_seconds",
                "openai.max_tokens"
            ]
        );
    }
}
