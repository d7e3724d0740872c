//! Configuration file loading for agent-playground
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PLAYGROUND_`-prefixed environment variables
//! 2. `OPENAI_MODEL`, `OPENAI_TEMPERATURE`, `OPENAI_MAX_TOKENS`
//! 3. `--config <path>` specified file
//! 4. Project root: `./playground.toml` or `./.playground.toml`
//! 5. Global: `$XDG_CONFIG_HOME/agent-playground/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileDialogsConfig, FileLoggingConfig, FileOpenAiConfig,
    FileReplConfig,
};
pub use loader::{ConfigLoadError, ConfigLoader};
