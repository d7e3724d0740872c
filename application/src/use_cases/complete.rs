//! Completion use case.
//!
//! Wraps a [`CompletionTransport`] with a bounded retry loop and validates
//! what comes back, so callers only ever see a well-formed
//! [`CompletionResult`] or a [`CompletionError`].
//!
//! Retry schedule: up to [`MAX_RETRIES`] attempts. After failed attempt `k`
//! (1-based) the client sleeps `1.5 × k` seconds before trying again. Every
//! transport error is treated the same; there is no jitter.

use crate::config::CompletionSettings;
use crate::ports::completion_transport::{CompletionTransport, ProviderReply, TransportError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::sleeper::{Sleeper, TokioSleeper};
use playground_domain::{CompletionRequest, CompletionResult, Turn};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Total attempts per completion, including the first.
pub const MAX_RETRIES: u32 = 3;

const BACKOFF_STEP: Duration = Duration::from_millis(1500);

/// Delay after failed attempt `attempt` (1-based).
pub fn backoff_delay(attempt: u32) -> Duration {
    BACKOFF_STEP * attempt
}

/// Errors that cross the `complete()` boundary.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Completion failed after {attempts} attempts: {source}")]
    Upstream {
        attempts: u32,
        #[source]
        source: TransportError,
    },

    #[error("Malformed response: no text and no function call")]
    MalformedResponse,
}

/// Retrying client for the text-generation service.
///
/// Holds no state between calls beyond its construction-time settings.
pub struct CompletionClient {
    transport: Arc<dyn CompletionTransport>,
    sleeper: Arc<dyn Sleeper>,
    settings: CompletionSettings,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl CompletionClient {
    pub fn new(transport: Arc<dyn CompletionTransport>, settings: CompletionSettings) -> Self {
        Self {
            transport,
            sleeper: Arc::new(TokioSleeper),
            settings,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Replace the sleeper used between attempts.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn settings(&self) -> &CompletionSettings {
        &self.settings
    }

    /// A request over `turns` carrying this client's model settings.
    pub fn request(&self, turns: Vec<Turn>) -> CompletionRequest {
        CompletionRequest::new(&self.settings.model, turns, self.settings.temperature)
            .with_max_output_tokens(self.settings.max_output_tokens)
    }

    /// Send `request`, retrying transport failures.
    pub async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResult, CompletionError> {
        debug!(
            "Sending completion: model={}, {} turns, {} functions",
            request.model_id,
            request.turns.len(),
            request.available_functions.len()
        );

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.transport.send(&request).await {
                Ok(reply) => {
                    if let Some(usage) = &reply.usage {
                        debug!(
                            "Token usage: prompt={}, completion={}, total={}",
                            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
                        );
                    }
                    return validate(reply);
                }
                Err(e) if attempt < MAX_RETRIES => {
                    let delay = backoff_delay(attempt);
                    warn!(
                        "Completion attempt {}/{} failed: {}; retrying in {:.1}s",
                        attempt,
                        MAX_RETRIES,
                        e,
                        delay.as_secs_f64()
                    );
                    self.conversation_logger.log(ConversationEvent::new(
                        "completion_attempt_failed",
                        json!({
                            "attempt": attempt,
                            "max_attempts": MAX_RETRIES,
                            "delay_secs": delay.as_secs_f64(),
                            "error": e.to_string(),
                        }),
                    ));
                    self.sleeper.sleep(delay).await;
                }
                Err(e) => {
                    error!("Completion failed after {} attempts: {}", attempt, e);
                    self.conversation_logger.log(ConversationEvent::new(
                        "completion_exhausted",
                        json!({
                            "attempts": attempt,
                            "error": e.to_string(),
                        }),
                    ));
                    return Err(CompletionError::Upstream {
                        attempts: attempt,
                        source: e,
                    });
                }
            }
        }
    }
}

/// A named function call wins over text; otherwise non-blank text is required.
fn validate(reply: ProviderReply) -> Result<CompletionResult, CompletionError> {
    if let Some(call) = reply.function_call
        && !call.name.trim().is_empty()
    {
        return Ok(CompletionResult::FunctionCall(call));
    }

    match reply.content {
        Some(text) if !text.trim().is_empty() => Ok(CompletionResult::Text(text)),
        _ => Err(CompletionError::MalformedResponse),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use playground_domain::FunctionCall;

    fn failure() -> Result<ProviderReply, TransportError> {
        Err(TransportError::Connection("connection reset".to_string()))
    }

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn test_backoff_schedule() {
        assert_eq!(backoff_delay(1), secs(1.5));
        assert_eq!(backoff_delay(2), secs(3.0));
    }

    #[tokio::test]
    async fn test_success_first_try_does_not_sleep() {
        let transport = Arc::new(ScriptedTransport::new(vec![Ok(ProviderReply::text("hi"))]));
        let sleeper = Arc::new(RecordingSleeper::default());
        let client = client_with(transport.clone(), sleeper.clone());

        let result = client.complete(client.request(vec![Turn::user("hello")])).await;

        assert_eq!(result.unwrap(), CompletionResult::text("hi"));
        assert!(sleeper.durations().is_empty());
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_one_failure_then_success() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            failure(),
            Ok(ProviderReply::text("recovered")),
        ]));
        let sleeper = Arc::new(RecordingSleeper::default());
        let client = client_with(transport.clone(), sleeper.clone());

        let result = client.complete(client.request(vec![])).await.unwrap();

        assert_eq!(result.as_text(), Some("recovered"));
        assert_eq!(sleeper.durations(), vec![secs(1.5)]);
    }

    #[tokio::test]
    async fn test_two_failures_then_success() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            failure(),
            Err(TransportError::Timeout),
            Ok(ProviderReply::text("third time")),
        ]));
        let sleeper = Arc::new(RecordingSleeper::default());
        let client = client_with(transport.clone(), sleeper.clone());

        let result = client.complete(client.request(vec![])).await.unwrap();

        assert_eq!(result.as_text(), Some("third time"));
        assert_eq!(sleeper.durations(), vec![secs(1.5), secs(3.0)]);
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_exhausted_after_three_attempts() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            failure(),
            failure(),
            Err(TransportError::Status {
                status: 500,
                body: "boom".to_string(),
            }),
            Ok(ProviderReply::text("never reached")),
        ]));
        let sleeper = Arc::new(RecordingSleeper::default());
        let logger = Arc::new(CapturingLogger::default());
        let client =
            client_with(transport.clone(), sleeper.clone()).with_conversation_logger(logger.clone());

        let err = client.complete(client.request(vec![])).await.unwrap_err();

        match err {
            CompletionError::Upstream { attempts, source } => {
                assert_eq!(attempts, 3);
                assert!(matches!(source, TransportError::Status { status: 500, .. }));
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
        assert_eq!(transport.requests().len(), 3);
        assert_eq!(sleeper.durations(), vec![secs(1.5), secs(3.0)]);
        assert_eq!(
            logger.event_types(),
            vec![
                "completion_attempt_failed",
                "completion_attempt_failed",
                "completion_exhausted"
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_reply_is_malformed_and_not_retried() {
        for reply in [
            ProviderReply::default(),
            ProviderReply::text(""),
            ProviderReply::text("   \n"),
            ProviderReply::call(FunctionCall::structured("", serde_json::json!({}))),
        ] {
            let transport = Arc::new(ScriptedTransport::new(vec![Ok(reply)]));
            let sleeper = Arc::new(RecordingSleeper::default());
            let client = client_with(transport.clone(), sleeper.clone());

            let err = client.complete(client.request(vec![])).await.unwrap_err();

            assert!(matches!(err, CompletionError::MalformedResponse));
            assert_eq!(transport.requests().len(), 1);
            assert!(sleeper.durations().is_empty());
        }
    }

    #[tokio::test]
    async fn test_function_call_without_content_is_accepted() {
        let call = FunctionCall::structured("get_weather", serde_json::json!({"location": "Tokyo"}));
        let transport = Arc::new(ScriptedTransport::new(vec![Ok(ProviderReply::call(
            call.clone(),
        ))]));
        let client = client_with(transport, Arc::new(RecordingSleeper::default()));

        let result = client.complete(client.request(vec![])).await.unwrap();

        assert_eq!(result, CompletionResult::FunctionCall(call));
    }

    #[tokio::test]
    async fn test_function_call_wins_over_text() {
        let call = FunctionCall::structured("get_forex", serde_json::json!({"action": "rate"}));
        let reply = ProviderReply {
            content: Some("Let me check.".to_string()),
            function_call: Some(call.clone()),
            ..Default::default()
        };
        let transport = Arc::new(ScriptedTransport::new(vec![Ok(reply)]));
        let client = client_with(transport, Arc::new(RecordingSleeper::default()));

        let result = client.complete(client.request(vec![])).await.unwrap();

        assert_eq!(result.function_call(), Some(&call));
    }

    #[test]
    fn test_request_carries_settings() {
        let transport = Arc::new(ScriptedTransport::new(vec![]));
        let client = CompletionClient::new(
            transport,
            CompletionSettings::new("gpt-4.1", 0.2).with_max_output_tokens(Some(512)),
        );

        let request = client.request(vec![Turn::user("q")]);

        assert_eq!(request.model_id, "gpt-4.1");
        assert_eq!(request.temperature, 0.2);
        assert_eq!(request.max_output_tokens, Some(512));
        assert!(!request.has_functions());
    }
}
