//! Catalogue read service.
//!
//! Wraps the [`ItemRepository`] gateway with identifier parsing, a bounded
//! store wait and the mapping from port errors onto domain errors. Nothing
//! is retried here; retries are user initiated.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::domain::ports::{ItemRepository, ItemRepositoryError};
use crate::domain::{Error, Item, ItemId};

/// Default bound on a single store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Message returned for unknown and malformed identifiers alike.
pub const ITEM_NOT_FOUND: &str = "Item not found";

pub(crate) fn map_item_repository_error(error: ItemRepositoryError) -> Error {
    match error {
        ItemRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("item store unavailable: {message}"))
        }
        ItemRepositoryError::Query { message } => {
            Error::internal(format!("item store error: {message}"))
        }
    }
}

/// Read service over the catalogue store.
#[derive(Clone)]
pub struct CatalogueService {
    repository: Arc<dyn ItemRepository>,
    timeout: Duration,
}

impl CatalogueService {
    /// Build a service using [`DEFAULT_STORE_TIMEOUT`].
    pub fn new(repository: Arc<dyn ItemRepository>) -> Self {
        Self::with_timeout(repository, DEFAULT_STORE_TIMEOUT)
    }

    /// Build a service with an explicit store timeout.
    pub fn with_timeout(repository: Arc<dyn ItemRepository>, timeout: Duration) -> Self {
        Self {
            repository,
            timeout,
        }
    }

    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T, Error>
    where
        F: Future<Output = Result<T, ItemRepositoryError>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(error)) => {
                warn!(operation, error = %error, "item store call failed");
                Err(map_item_repository_error(error))
            }
            Err(_) => {
                warn!(operation, timeout_ms = self.timeout.as_millis(), "item store timed out");
                Err(Error::service_unavailable("item store timed out"))
            }
        }
    }

    /// Return every item in store-native order.
    pub async fn list_items(&self) -> Result<Vec<Item>, Error> {
        self.bounded("list", self.repository.list()).await
    }

    /// Look up one item by its raw identifier.
    ///
    /// Malformed identifiers are reported exactly like unknown ones.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use product_hub::domain::{CatalogueService, ErrorCode};
    /// use product_hub::domain::ports::FixtureItemRepository;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let service = CatalogueService::new(Arc::new(FixtureItemRepository));
    /// let err = service.get_item("missing").await.unwrap_err();
    /// assert_eq!(err.code(), ErrorCode::NotFound);
    /// # });
    /// ```
    pub async fn get_item(&self, raw_id: &str) -> Result<Item, Error> {
        let Ok(id) = ItemId::new(raw_id) else {
            return Err(Error::not_found(ITEM_NOT_FOUND));
        };
        self.bounded("find_by_id", self.repository.find_by_id(&id))
            .await?
            .ok_or_else(|| Error::not_found(ITEM_NOT_FOUND))
    }
}
