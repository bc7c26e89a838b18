//! In-memory options store
//!
//! Implements OptionsStore over a plain map. Used by tests and by
//! embedding hosts that bring their own persistence.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{OptionsStore, StorageError};

/// In-memory options store
#[derive(Debug, Default)]
pub struct MemoryOptionsStore {
    entries: Mutex<HashMap<String, serde_json::Value>>,
}

impl MemoryOptionsStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, serde_json::Value>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::BackendError("options map poisoned".to_string()))
    }
}

#[async_trait(?Send)]
impl OptionsStore for MemoryOptionsStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_set_get_delete() {
        let store = MemoryOptionsStore::new();

        assert!(store.get("missing").await.unwrap().is_none());

        store.set("key", json!({"a": 1})).await.unwrap();
        assert_eq!(store.get("key").await.unwrap(), Some(json!({"a": 1})));

        store.set("key", json!(2)).await.unwrap();
        assert_eq!(store.get("key").await.unwrap(), Some(json!(2)));

        store.delete("key").await.unwrap();
        assert!(store.get("key").await.unwrap().is_none());

        // Deleting an absent key is fine.
        store.delete("key").await.unwrap();
    }
}
