//! Completion call types.
//!
//! - [`request::CompletionRequest`]: what is sent to the text-generation service
//! - [`request::FunctionSpec`]: a callable capability declared to the model
//! - [`response::CompletionResult`]: direct text or a function-call directive

pub mod request;
pub mod response;
