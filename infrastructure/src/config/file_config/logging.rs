//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of routing events
    pub conversation_log: Option<String>,
    /// Diagnostic (tracing) log file; stderr only when unset
    pub file: Option<String>,
}
