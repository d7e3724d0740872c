//! Routing domain.
//!
//! Turns one model response into a dispatch decision:
//!
//! ```text
//! CompletionResult ──► decide() ──► DispatchDecision
//!                        │
//!                        ├─ Text                → DirectAnswer
//!                        ├─ get_weather(args)   → Weather(params)   (or Forex, if corrected)
//!                        ├─ get_forex(args)     → Forex(params)
//!                        └─ bad args / unknown  → FallbackGeneral(reason)
//! ```
//!
//! - [`functions`]: the declared function specs
//! - [`params`]: typed, default-filled parameters per sub-handler
//! - [`heuristic`]: keyword/regex forex detector and parameter extractor
//! - [`decision`]: the decision itself
//! - [`phase`]: named phases of one routing exchange, for diagnostics

pub mod decision;
pub mod error;
pub mod functions;
pub mod heuristic;
pub mod params;
pub mod phase;
