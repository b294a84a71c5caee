//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL item store using Diesel
//! - **document_store**: in-memory item store loaded from a JSON file
//! - **auth**: login against a configured credential pair
//! - **submission**: product submissions recorded in the log
//!
//! Adapters translate between domain types and infrastructure
//! representations and hold no business rules.

pub mod auth;
pub mod document_store;
pub mod persistence;
pub mod submission;
