//! Application-level configuration.
//!
//! Settings the completion client applies to every request it builds. They
//! are fixed at construction and never change for the lifetime of a client.

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Per-client completion settings.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub temperature: f32,
    /// Output token cap; `None` leaves it to the provider.
    pub max_output_tokens: Option<u32>,
}

impl CompletionSettings {
    pub fn new(model: impl Into<String>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            temperature,
            max_output_tokens: None,
        }
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: Option<u32>) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL, DEFAULT_TEMPERATURE)
    }
}
