//! Cached document read path
//!
//! Consumers (the settings screen, collaborating plugins) read the
//! current document through a reader scoped to one request: the first
//! lookup loads and caches, later lookups serve the cache, and a new
//! request starts from a fresh reader or an explicit `invalidate`.
//!
//! The canonical file is authoritative when present; the options-store
//! entry is the fallback, and an empty document the default.

use tracing::warn;

use crate::models::{Document, DocumentField};
use crate::storage::mirror::SellersFile;
use crate::storage::{OPTION_KEY, OptionsStore, StorageError};

/// Request-scoped document reader
pub struct DocumentReader<S: OptionsStore> {
    store: S,
    file: SellersFile,
    cache: Option<Document>,
}

impl<S: OptionsStore> DocumentReader<S> {
    /// Create a reader over the given store and canonical file
    pub fn new(store: S, file: SellersFile) -> Self {
        Self {
            store,
            file,
            cache: None,
        }
    }

    /// The effective current document.
    ///
    /// Loaded once per reader lifetime; subsequent calls are served from
    /// the cache.
    pub async fn document(&mut self) -> Result<Document, StorageError> {
        if let Some(document) = &self.cache {
            return Ok(document.clone());
        }

        let document = self.load().await?;
        self.cache = Some(document.clone());
        Ok(document)
    }

    /// A single top-level field of the current document
    pub async fn value(&mut self, field: DocumentField) -> Result<serde_json::Value, StorageError> {
        let document = self.document().await?;

        let value = match field {
            DocumentField::ContactEmail => serde_json::Value::String(document.contact_email),
            DocumentField::ContactAddress => serde_json::Value::String(document.contact_address),
            DocumentField::Version => serde_json::Value::String(document.version),
            DocumentField::Identifiers => serde_json::to_value(&document.identifiers)
                .map_err(|e| StorageError::SerializationError(e.to_string()))?,
            DocumentField::Sellers => serde_json::to_value(&document.sellers)
                .map_err(|e| StorageError::SerializationError(e.to_string()))?,
        };

        Ok(value)
    }

    /// Drop the cache so the next lookup re-reads the stores
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    async fn load(&self) -> Result<Document, StorageError> {
        // The file wins when it exists and parses; anything else falls
        // back to the options store.
        match self.file.read().await {
            Ok(Some(document)) => return Ok(document),
            Ok(None) => {}
            Err(e) => warn!("Ignoring unreadable sellers file: {e}"),
        }

        match self.store.get(OPTION_KEY).await? {
            Some(value) => serde_json::from_value(value).map_err(|e| {
                StorageError::SerializationError(format!("Invalid stored document: {e}"))
            }),
            None => Ok(Document::default()),
        }
    }
}
