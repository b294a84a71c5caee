//! Product submission adapters.

mod logging_product_submitter;

pub use logging_product_submitter::{DEFAULT_SUBMIT_LATENCY, LoggingProductSubmitter};
