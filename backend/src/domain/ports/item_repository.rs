//! Read-side port for the catalogue document store.
//!
//! The gateway hides the store behind two reads: the whole collection and a
//! single lookup by identifier. Adapters translate store documents into
//! validated [`Item`] values and report failures with
//! [`ItemRepositoryError`].

use async_trait::async_trait;

use crate::domain::{Item, ItemId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading catalogue items.
    pub enum ItemRepositoryError {
        /// The store could not be reached.
        Connection { message: String } =>
            "item store connection failed: {message}",
        /// The query failed or a document could not be decoded.
        Query { message: String } =>
            "item store query failed: {message}",
    }
}

/// Port for reading catalogue items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Return every item in store-native order. An empty store yields an
    /// empty vector.
    async fn list(&self) -> Result<Vec<Item>, ItemRepositoryError>;

    /// Look up one item; `Ok(None)` when no record matches.
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemRepositoryError>;
}

/// Empty catalogue for tests and wiring that never reads items.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureItemRepository;

#[async_trait]
impl ItemRepository for FixtureItemRepository {
    async fn list(&self) -> Result<Vec<Item>, ItemRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: &ItemId) -> Result<Option<Item>, ItemRepositoryError> {
        Ok(None)
    }
}
