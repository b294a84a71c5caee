//! Driven port receiving completed product submissions.
//!
//! The submission form hands a validated [`ProductPayload`] to this port.
//! No adapter persists submissions yet; the logging adapter only records
//! them.

use async_trait::async_trait;

use crate::domain::ProductPayload;

use super::define_port_error;

define_port_error! {
    /// Errors raised while handing a submission over.
    pub enum ProductSubmitterError {
        /// The receiving side could not be reached.
        Unavailable { message: String } =>
            "product submission unavailable: {message}",
        /// The receiving side refused the payload.
        Rejected { message: String } =>
            "product submission rejected: {message}",
    }
}

/// Port for accepting product submissions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductSubmitter: Send + Sync {
    /// Deliver one submission.
    async fn submit(&self, payload: &ProductPayload) -> Result<(), ProductSubmitterError>;
}
