//! Identifier model

use serde::{Deserialize, Serialize};

/// A named supplementary business identifier attached to the document
/// (e.g. a TAG-ID or DUNS number).
///
/// Identifier order is meaningful to consumers (first match wins), so
/// the document preserves insertion order. Duplicate names are allowed
/// with undefined precedence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identifier {
    /// Identifier name (e.g. "TAG-ID")
    pub name: String,
    /// Identifier value
    pub value: String,
}

impl Identifier {
    /// Create a new identifier
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
