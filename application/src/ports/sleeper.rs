//! Sleep port used between completion retries.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the current task for a duration.
///
/// Injected into the completion client so tests can observe the backoff
/// schedule without waiting it out.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// [`Sleeper`] backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
