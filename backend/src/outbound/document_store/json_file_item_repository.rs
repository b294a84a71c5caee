//! Item store served from a JSON document file.
//!
//! The file holds an array of item documents in the same shape the HTTP
//! API returns. It is read once; the repository then serves the parsed
//! items from memory in file order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use tracing::info;

use crate::domain::ports::{ItemRepository, ItemRepositoryError};
use crate::domain::{Item, ItemId};

/// Errors raised while loading the document file.
#[derive(Debug, thiserror::Error)]
pub enum DocumentStoreError {
    /// The file could not be read.
    #[error("failed to read item documents at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid array of item documents.
    #[error("invalid item documents in {path}: {message}")]
    Parse { path: PathBuf, message: String },
    /// Two documents share an identifier.
    #[error("duplicate item id {id} in {path}")]
    DuplicateId { path: PathBuf, id: String },
}

fn read_error(path: &Path, source: std::io::Error) -> DocumentStoreError {
    DocumentStoreError::Read {
        path: path.to_path_buf(),
        source,
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, DocumentStoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "item document path must be a file",
            ),
        )
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|source| read_error(path, source))?;
    dir.read(Path::new(file_name))
        .map_err(|source| read_error(path, source))
}

/// In-memory item store loaded from a JSON file.
#[derive(Debug, Clone, Default)]
pub struct JsonFileItemRepository {
    items: Arc<Vec<Item>>,
}

impl JsonFileItemRepository {
    /// Serve the given items in order.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    /// Load and validate every document in `path`.
    pub fn load(path: &Path) -> Result<Self, DocumentStoreError> {
        let payload = read_file(path)?;
        let items: Vec<Item> =
            serde_json::from_slice(&payload).map_err(|err| DocumentStoreError::Parse {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;

        let mut seen = HashSet::with_capacity(items.len());
        if let Some(duplicate) = items.iter().find(|item| !seen.insert(item.id())) {
            return Err(DocumentStoreError::DuplicateId {
                path: path.to_path_buf(),
                id: duplicate.id().to_string(),
            });
        }

        info!(path = %path.display(), count = items.len(), "loaded item documents");
        Ok(Self::from_items(items))
    }

    /// Items held by the store, in file order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

#[async_trait]
impl ItemRepository for JsonFileItemRepository {
    async fn list(&self) -> Result<Vec<Item>, ItemRepositoryError> {
        Ok(self.items.as_ref().clone())
    }

    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, ItemRepositoryError> {
        Ok(self.items.iter().find(|item| item.id() == id).cloned())
    }
}
