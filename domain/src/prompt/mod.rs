//! Prompt domain
//!
//! Fixed system prompts used by the agents.

mod template;

pub use template::PromptTemplate;
