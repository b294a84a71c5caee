//! Submission adapter that records payloads in the log.
//!
//! Nothing is persisted. The adapter waits for a simulated round trip and
//! then emits the payload as structured JSON.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ProductPayload;
use crate::domain::ports::{ProductSubmitter, ProductSubmitterError, Sleeper, TokioSleeper};

/// Simulated submission round trip.
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(1500);

/// [`ProductSubmitter`] that logs each payload after a simulated delay.
#[derive(Clone)]
pub struct LoggingProductSubmitter {
    sleeper: Arc<dyn Sleeper>,
    latency: Duration,
}

impl LoggingProductSubmitter {
    /// Submitter waiting [`DEFAULT_SUBMIT_LATENCY`] on `sleeper` before logging.
    pub fn new(sleeper: Arc<dyn Sleeper>) -> Self {
        Self {
            sleeper,
            latency: DEFAULT_SUBMIT_LATENCY,
        }
    }

    /// Override the simulated submission delay.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for LoggingProductSubmitter {
    fn default() -> Self {
        Self::new(Arc::new(TokioSleeper))
    }
}

#[async_trait]
impl ProductSubmitter for LoggingProductSubmitter {
    async fn submit(&self, payload: &ProductPayload) -> Result<(), ProductSubmitterError> {
        self.sleeper.sleep(self.latency).await;
        let document = serde_json::to_string(payload)
            .map_err(|err| ProductSubmitterError::rejected(err.to_string()))?;
        info!(
            name = %payload.name,
            category = %payload.category,
            payload = %document,
            "product submission received"
        );
        Ok(())
    }
}
