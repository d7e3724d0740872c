//! Conversation domain.
//!
//! - [`entities::Turn`]: a single message attributed to a role
//! - [`entities::Conversation`]: the ordered turns of one dialog

pub mod entities;
