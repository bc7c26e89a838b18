//! Storage backend abstraction
//!
//! Defines the OptionsStore trait and implementations for different
//! key/value stores, plus the canonical-file mirror:
//! - SqliteOptionsStore: SQLite-backed options table
//! - MemoryOptionsStore: in-memory store (tests, embedding hosts)
//! - SellersFile: the on-disk sellers.json mirror

use async_trait::async_trait;

/// Options-store entry holding the whole sellers document
pub const OPTION_KEY: &str = "sellers_json";

/// Per-field form transients the save pipeline clears so a stale draft
/// never pre-fills the next screen load. The encoder scratch fields are
/// part of the screen and leak into the store the same way.
pub const DRAFT_OPTION_KEYS: &[&str] = &[
    "form_contact_address",
    "form_contact_email",
    "form_version",
    "form_identifiers",
    "form_sellers",
    "form_encoder_input",
    "form_encoder_output",
    "form_encoder_mode",
];

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Storage backend error: {0}")]
    BackendError(String),
}

/// Trait for key/value options stores
///
/// This trait abstracts the database-backed options table the settings
/// screen edits through. Entries are JSON values under string keys;
/// writes replace the prior value wholesale.
#[async_trait(?Send)]
pub trait OptionsStore: Send + Sync {
    /// Read an entry, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError>;

    /// Write an entry, replacing any prior value
    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StorageError>;

    /// Delete an entry; deleting an absent key is not an error
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

pub mod memory;
pub mod mirror;
pub mod sqlite;
