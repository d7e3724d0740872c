//! Infrastructure layer for agent-playground
//!
//! Adapters implementing the ports defined in the application layer:
//! the OpenAI-compatible HTTP transport, the mock weather and forex desks,
//! JSON dialog storage, JSONL conversation logging, and configuration
//! file loading.

pub mod config;
pub mod dialogs;
pub mod handlers;
pub mod logging;
pub mod openai;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoadError, ConfigLoader, FileConfig, FileDialogsConfig, FileLoggingConfig,
    FileOpenAiConfig, FileReplConfig,
};
pub use dialogs::JsonDialogStore;
pub use handlers::{ForexDesk, WeatherDesk};
pub use logging::JsonlConversationLogger;
pub use openai::{OpenAiError, OpenAiSettings, OpenAiTransport};
