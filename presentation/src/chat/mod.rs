//! Interactive chat module
//!
//! Provides the chat session state, REPL command parsing, and the
//! readline-based interactive interface.

mod command;
mod repl;
mod session;

pub use command::ReplCommand;
pub use repl::ChatRepl;
pub use session::ChatSession;
