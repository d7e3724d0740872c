//! Completion endpoint configuration from TOML (`[openai]` section)

use crate::openai::transport::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, OpenAiSettings};
use playground_application::CompletionSettings;
use playground_application::config::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable holding the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key; prefer `api_key_env`.
    pub api_key: Option<String>,
    /// Base URL; `/v1/chat/completions` is appended.
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    /// Output token cap (default: provider decides).
    pub max_tokens: Option<u32>,
    /// Per-request timeout. Unset means no explicit timeout.
    pub timeout_seconds: Option<u64>,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
            timeout_seconds: None,
        }
    }
}

impl FileOpenAiConfig {
    pub fn to_transport_settings(&self) -> OpenAiSettings {
        OpenAiSettings {
            api_key: self.api_key.clone(),
            api_key_env: self.api_key_env.clone(),
            base_url: self.base_url.clone(),
            timeout: self.timeout_seconds.map(Duration::from_secs),
        }
    }

    pub fn to_completion_settings(&self) -> CompletionSettings {
        CompletionSettings::new(&self.model, self.temperature).with_max_output_tokens(self.max_tokens)
    }
}
