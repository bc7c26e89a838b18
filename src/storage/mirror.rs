//! Canonical sellers.json file mirror
//!
//! The on-disk file is the read-authoritative copy of the document: when
//! it exists, consumers read it in preference to the options store. The
//! write side treats it as a best-effort mirror, so a missing or
//! read-only file degrades the save instead of failing it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use super::StorageError;
use crate::models::Document;

/// Fixed name of the canonical file in the host's web root
pub const SELLERS_FILE_NAME: &str = "sellers.json";

/// Observed state of the canonical file, for the operator notice shown
/// on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorStatus {
    /// File exists and can be overwritten
    Writable,
    /// File does not exist yet; the next save will attempt to create it
    Missing,
    /// File exists but cannot be overwritten
    ReadOnly,
}

impl MirrorStatus {
    /// Operator-facing warning for degraded states, `None` when healthy
    pub fn notice(self) -> Option<&'static str> {
        match self {
            Self::Writable => None,
            Self::Missing => Some(
                "A sellers.json file does not exist. Updating this page will attempt to create a new file.",
            ),
            Self::ReadOnly => Some(
                "The sellers.json file is not writable. Updating these settings will save to the options store but will not write to the sellers.json file.",
            ),
        }
    }
}

/// Handle to the canonical sellers.json file
#[derive(Debug, Clone)]
pub struct SellersFile {
    path: PathBuf,
}

impl SellersFile {
    /// Point at the canonical file inside the given web root
    pub fn in_web_root(web_root: impl AsRef<Path>) -> Self {
        Self {
            path: web_root.as_ref().join(SELLERS_FILE_NAME),
        }
    }

    /// Point at an explicit file path
    pub fn at_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The full path of the canonical file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Inspect the file for the admin notice
    pub async fn status(&self) -> MirrorStatus {
        match fs::metadata(&self.path).await {
            Ok(metadata) if metadata.permissions().readonly() => MirrorStatus::ReadOnly,
            Ok(_) => MirrorStatus::Writable,
            Err(_) => MirrorStatus::Missing,
        }
    }

    /// Read and parse the canonical file.
    ///
    /// Returns `Ok(None)` when the file does not exist; a present but
    /// unparseable file is an error the caller may fall back from.
    pub async fn read(&self) -> Result<Option<Document>, StorageError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::IoError(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let text = String::from_utf8(bytes)
            .map_err(|e| StorageError::SerializationError(format!("Invalid UTF-8: {e}")))?;
        let document = serde_json::from_str(&text).map_err(|e| {
            StorageError::SerializationError(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(Some(document))
    }

    /// Overwrite the canonical file with a pretty-printed document.
    ///
    /// The content is written to a temp file beside the target and
    /// renamed into place, so a reader never observes a torn file. A
    /// read-only target is refused up front.
    pub async fn write(&self, document: &Document) -> Result<(), StorageError> {
        if self.status().await == MirrorStatus::ReadOnly {
            return Err(StorageError::IoError(format!(
                "{} is not writable",
                self.path.display()
            )));
        }

        let json = serde_json::to_string_pretty(document).map_err(|e| {
            StorageError::SerializationError(format!("Failed to serialize document: {e}"))
        })?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json.as_bytes()).await.map_err(|e| {
            StorageError::IoError(format!("Failed to write {}: {}", tmp_path.display(), e))
        })?;

        fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            StorageError::IoError(format!(
                "Failed to move {} into place: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let file = SellersFile::in_web_root(temp.path());

        assert_eq!(file.status().await, MirrorStatus::Missing);
        assert!(file.read().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_write_then_read_roundtrip() {
        let temp = TempDir::new().unwrap();
        let file = SellersFile::in_web_root(temp.path());

        let document = Document {
            contact_email: "ads@example.com".to_string(),
            ..Document::default()
        };
        file.write(&document).await.unwrap();

        assert_eq!(file.status().await, MirrorStatus::Writable);
        assert_eq!(file.read().await.unwrap(), Some(document));

        // No temp file left behind.
        assert!(!file.path().with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_write_is_pretty_printed() {
        let temp = TempDir::new().unwrap();
        let file = SellersFile::in_web_root(temp.path());

        file.write(&Document::default()).await.unwrap();
        let text = std::fs::read_to_string(file.path()).unwrap();
        assert!(text.contains("\n  \"contact_email\""));
    }

    #[tokio::test]
    async fn test_unparseable_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let file = SellersFile::in_web_root(temp.path());

        std::fs::write(file.path(), "{ not json").unwrap();
        assert!(matches!(
            file.read().await,
            Err(StorageError::SerializationError(_))
        ));
    }

    #[tokio::test]
    async fn test_read_only_file_refused() {
        let temp = TempDir::new().unwrap();
        let file = SellersFile::in_web_root(temp.path());

        std::fs::write(file.path(), "{}").unwrap();
        let mut perms = std::fs::metadata(file.path()).unwrap().permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(file.path(), perms).unwrap();

        assert_eq!(file.status().await, MirrorStatus::ReadOnly);
        assert!(file.write(&Document::default()).await.is_err());
    }
}
