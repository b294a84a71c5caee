//! PostgreSQL-backed item store adapter.
//!
//! Documents are stored as JSONB and validated into [`Item`] values on
//! read. A document that fails validation fails the whole read as a query
//! error rather than being skipped.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use serde_json::Value;

use crate::domain::ports::{ItemRepository, ItemRepositoryError};
use crate::domain::{Item, ItemDraft, ItemId};

use super::diesel_helpers::{
    collect_rows, is_connection_error, map_diesel_error_message, map_pool_error_message,
};
use super::models::{ItemRow, NewItemRow};
use super::pool::{DbPool, PoolError};
use super::schema::items;

/// Diesel-backed implementation of the item store port.
#[derive(Clone)]
pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    /// Create a repository over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert items that are not yet stored, keyed by identifier.
    ///
    /// Returns the number of rows inserted.
    pub async fn seed(&self, seed_items: &[Item]) -> Result<usize, ItemRepositoryError> {
        let rows = seed_items
            .iter()
            .map(|item| {
                serde_json::to_value(item)
                    .map(|document| NewItemRow {
                        id: item.id().to_string(),
                        document,
                        created_at: item.created_at(),
                    })
                    .map_err(|err| ItemRepositoryError::query(err.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(items::table)
            .values(&rows)
            .on_conflict(items::id)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "item seed"))
    }
}

fn map_pool_error(error: PoolError) -> ItemRepositoryError {
    ItemRepositoryError::connection(map_pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error, operation: &str) -> ItemRepositoryError {
    if is_connection_error(&error) {
        ItemRepositoryError::connection(map_diesel_error_message(error, operation))
    } else {
        ItemRepositoryError::query(map_diesel_error_message(error, operation))
    }
}

/// Fill `createdAt` from the column when the document omits it.
fn row_to_item(row: ItemRow) -> Result<Item, String> {
    let ItemRow {
        id,
        document,
        created_at,
    } = row;
    let mut draft: ItemDraft = match document {
        Value::Object(_) => serde_json::from_value(document)
            .map_err(|err| format!("item {id}: malformed document: {err}"))?,
        other => return Err(format!("item {id}: expected object document, got {other}")),
    };
    draft.id = id.clone();
    if draft.created_at.is_none() {
        draft.created_at = created_at;
    }
    Item::new(draft).map_err(|err| format!("item {id}: {err}"))
}

#[async_trait]
impl ItemRepository for DieselItemRepository {
    async fn list(&self) -> Result<Vec<Item>, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ItemRow> = items::table
            .select(ItemRow::as_select())
            .order_by((items::inserted_at, items::id))
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "item list"))?;
        collect_rows(rows.into_iter().map(row_to_item), ItemRepositoryError::query)
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ItemRow> = items::table
            .filter(items::id.eq(id.as_ref()))
            .select(ItemRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "item lookup"))?;
        row.map(row_to_item)
            .transpose()
            .map_err(ItemRepositoryError::query)
    }
}
