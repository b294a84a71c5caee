//! Async sleep abstraction.
//!
//! Simulated latencies and reset delays go through this port so tests can
//! observe the requested durations without waiting.

use std::time::Duration;

use async_trait::async_trait;

/// Async sleep port.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Wait for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Tokio-based sleeper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
