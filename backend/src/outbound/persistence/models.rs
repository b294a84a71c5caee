//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::items;

/// Row struct for reading from the items table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ItemRow {
    pub id: String,
    pub document: serde_json::Value,
    pub created_at: Option<DateTime<Utc>>,
}

/// Insertable struct for seeding item documents.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = items)]
pub(crate) struct NewItemRow {
    pub id: String,
    pub document: serde_json::Value,
    pub created_at: Option<DateTime<Utc>>,
}
