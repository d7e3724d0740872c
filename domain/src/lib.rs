//! Domain layer for agent-playground
//!
//! This crate contains the core types and rules of the playground.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! A [`Conversation`] is an ordered, append-only sequence of [`Turn`]s owned
//! by the front end. Agents receive the whole conversation and hand it back
//! with exactly one new trailing turn.
//!
//! ## Routing
//!
//! The supporter agent asks the model to either answer directly or call one
//! of two declared functions (`get_weather`, `get_forex`). [`decide`] turns
//! that single model response into a [`DispatchDecision`], including the
//! keyword-based correction for forex questions misrouted to weather.

pub mod completion;
pub mod conversation;
pub mod prompt;
pub mod routing;

// Re-export commonly used types
pub use completion::{
    request::{CompletionRequest, FunctionPolicy, FunctionSpec},
    response::{CompletionResult, FunctionCall, RawArguments, TokenUsage},
};
pub use conversation::entities::{Conversation, Role, Turn};
pub use prompt::PromptTemplate;
pub use routing::{
    decision::{DispatchDecision, DispatchTarget, decide},
    error::RoutingError,
    functions::{FOREX_FUNCTION, WEATHER_FUNCTION, supporter_functions},
    heuristic::{extract_amount, extract_forex_params, looks_like_forex, scan_currencies},
    params::{ForexAction, ForexParams, WeatherParams, WeatherQuery},
    phase::RoutingPhase,
};
