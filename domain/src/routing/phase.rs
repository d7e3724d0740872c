//! Phases of one supporter exchange

use std::fmt;

/// Where a single `chat()` call currently is
///
/// ```text
/// BuildingRequest -> AwaitingCompletion -> DirectAnswer ------------> Done
///                                      \-> Correcting -> Dispatching -> Done
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutingPhase {
    BuildingRequest,
    AwaitingCompletion,
    DirectAnswer,
    Correcting,
    Dispatching,
    Done,
}

impl RoutingPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingPhase::BuildingRequest => "building_request",
            RoutingPhase::AwaitingCompletion => "awaiting_completion",
            RoutingPhase::DirectAnswer => "direct_answer",
            RoutingPhase::Correcting => "correcting",
            RoutingPhase::Dispatching => "dispatching",
            RoutingPhase::Done => "done",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RoutingPhase::Done)
    }
}

impl fmt::Display for RoutingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
