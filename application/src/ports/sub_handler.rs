//! Sub-handler port
//!
//! A sub-handler answers one synthesized free-text query from a static lookup
//! table. It never fails: unrecognized input yields a best-effort reply built
//! from fixed defaults.

use playground_domain::Turn;

pub trait SubHandler: Send + Sync {
    /// Name recorded as `origin_agent` on replies.
    fn name(&self) -> &str;

    /// Answer a single user turn with an assistant turn.
    fn respond(&self, query: &Turn) -> Turn;
}
