//! SQLite options store
//!
//! Implements OptionsStore over a single `options` table, mirroring the
//! name/value options table the settings screen historically edited.
//! Values are stored as JSON text.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};

use super::{OptionsStore, StorageError};

/// SQLite-backed options store
pub struct SqliteOptionsStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteOptionsStore {
    /// Open (or create) an options database at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path)
            .map_err(|e| StorageError::BackendError(format!("failed to open options db: {e}")))?;
        Self::with_connection(conn)
    }

    /// Open an in-memory options store (for testing)
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            StorageError::BackendError(format!("failed to open in-memory options db: {e}"))
        })?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StorageError> {
        let conn = self.lock()?;
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS options (
                name TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )
        .map_err(|e| StorageError::BackendError(format!("failed to init options schema: {e}")))?;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StorageError> {
        self.conn
            .lock()
            .map_err(|_| StorageError::BackendError("options connection poisoned".to_string()))
    }
}

#[async_trait(?Send)]
impl OptionsStore for SqliteOptionsStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError> {
        let conn = self.lock()?;
        let text: Option<String> = conn
            .query_row(
                "SELECT value FROM options WHERE name = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StorageError::BackendError(format!("failed to read option {key}: {e}")))?;

        match text {
            Some(text) => {
                let value = serde_json::from_str(&text).map_err(|e| {
                    StorageError::SerializationError(format!("invalid option value {key}: {e}"))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StorageError> {
        let text = serde_json::to_string(&value).map_err(|e| {
            StorageError::SerializationError(format!("failed to serialize option {key}: {e}"))
        })?;

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO options (name, value) VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE SET value = excluded.value",
            params![key, text],
        )
        .map_err(|e| StorageError::BackendError(format!("failed to write option {key}: {e}")))?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM options WHERE name = ?1", params![key])
            .map_err(|e| {
                StorageError::BackendError(format!("failed to delete option {key}: {e}"))
            })?;
        Ok(())
    }
}
