//! reqwest-based completion transport

use super::error::OpenAiError;
use super::wire::{ChatPayload, ChatResponse};
use async_trait::async_trait;
use playground_application::{CompletionTransport, ProviderReply, TransportError};
use playground_domain::CompletionRequest;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Connection settings for [`OpenAiTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiSettings {
    /// Key used as-is when set; otherwise read from `api_key_env`.
    pub api_key: Option<String>,
    pub api_key_env: String,
    pub base_url: String,
    /// Per-request timeout. `None` keeps the HTTP client's default (no timeout).
    pub timeout: Option<Duration>,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl OpenAiSettings {
    /// Explicit key if non-empty, else the environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

/// Single-attempt HTTP transport. Retries belong to the completion client.
pub struct OpenAiTransport {
    client: reqwest::Client,
    api_key: Option<String>,
    api_key_env: String,
    endpoint: String,
}

impl OpenAiTransport {
    pub fn new(settings: OpenAiSettings) -> Result<Self, OpenAiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let api_key = settings.resolve_api_key();
        if api_key.is_none() {
            warn!(
                "No API key configured ({} is unset); completions will fail",
                settings.api_key_env
            );
        }

        Ok(Self {
            client,
            api_key,
            api_key_env: settings.api_key_env,
            endpoint: chat_completions_url(&settings.base_url),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, request: &CompletionRequest) -> Result<ProviderReply, OpenAiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| OpenAiError::MissingApiKey(self.api_key_env.clone()))?;

        let payload = ChatPayload::from_request(request);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(OpenAiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        debug!(
            "Received response from model {}",
            parsed.model.as_deref().unwrap_or("<unknown>")
        );
        Ok(parsed.into_reply())
    }
}

#[async_trait]
impl CompletionTransport for OpenAiTransport {
    async fn send(&self, request: &CompletionRequest) -> Result<ProviderReply, TransportError> {
        self.post(request).await.map_err(TransportError::from)
    }
}

/// `{base}/v1/chat/completions`, tolerating a trailing slash or `/v1`.
fn chat_completions_url(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.ends_with("/v1") {
        format!("{}/chat/completions", base)
    } else {
        format!("{}/v1/chat/completions", base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_timeout() {
        assert_eq!(OpenAiSettings::default().timeout, None);
    }

    #[test]
    fn test_endpoint_normalization() {
        assert_eq!(
            chat_completions_url("https://api.openai.com"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            chat_completions_url("http://localhost:8080/"),
            "http://localhost:8080/v1/chat/completions"
        );
        assert_eq!(
            chat_completions_url("http://localhost:8080/v1"),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_explicit_key_wins() {
        let settings = OpenAiSettings {
            api_key: Some("sk-explicit".to_string()),
            api_key_env: "PLAYGROUND_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.resolve_api_key().as_deref(), Some("sk-explicit"));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let settings = OpenAiSettings {
            api_key: Some("  ".to_string()),
            api_key_env: "PLAYGROUND_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.resolve_api_key(), None);
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let transport = OpenAiTransport::new(OpenAiSettings {
            api_key_env: "PLAYGROUND_TEST_UNSET_KEY_VAR".to_string(),
            ..Default::default()
        })
        .unwrap();

        let err = transport
            .send(&CompletionRequest::new("m", vec![], 0.0))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::MissingApiKey(ref v) if v == "PLAYGROUND_TEST_UNSET_KEY_VAR"));
    }

    #[test]
    fn test_builds_with_timeout() {
        let transport = OpenAiTransport::new(OpenAiSettings {
            api_key: Some("sk-test".to_string()),
            timeout: Some(Duration::from_secs(30)),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            transport.endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
    }
}
