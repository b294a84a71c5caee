//! File-backed item store for development and tests.

mod json_file_item_repository;

pub use json_file_item_repository::{DocumentStoreError, JsonFileItemRepository};
