//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! The item store is a single table of JSONB documents read through
//! `diesel-async` with a `bb8` pool. Row structs (`models.rs`) and the
//! schema (`schema.rs`) stay private to this module; only validated domain
//! items cross the boundary.
//!
//! # Example
//!
//! ```ignore
//! use product_hub::outbound::persistence::{DbPool, DieselItemRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/catalogue")).await?;
//! let repository = DieselItemRepository::new(pool);
//! ```

pub(crate) mod diesel_helpers;
mod diesel_item_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_item_repository::DieselItemRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
