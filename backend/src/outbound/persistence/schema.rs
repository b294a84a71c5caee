//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations in `backend/migrations`.
//! Regenerate with `diesel print-schema` when a migration changes a table.

diesel::table! {
    /// Catalogue item documents.
    ///
    /// Each row holds one item document as stored; the read adapter
    /// validates it on the way out.
    items (id) {
        /// Store-assigned identifier, exposed as `_id`.
        id -> Text,
        /// Item document (name, price, category and optional fields).
        document -> Jsonb,
        /// Creation timestamp used when the document omits `createdAt`.
        created_at -> Nullable<Timestamptz>,
        /// Insertion time; defines store-native order.
        inserted_at -> Timestamptz,
    }
}
