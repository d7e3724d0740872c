//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod completion_transport;
pub mod conversation_logger;
pub mod dialog_store;
pub mod sleeper;
pub mod sub_handler;
