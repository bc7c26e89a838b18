//! Canonical sellers document

use serde::{Deserialize, Serialize};

use super::identifier::Identifier;
use super::seller::Seller;

/// Format version written to every document
pub const DOCUMENT_VERSION: &str = "1.0";

/// The canonical sellers registry: contact info, supplementary
/// identifiers, and the disclosed seller entries.
///
/// This is the single unit of persistence. A save replaces the stored
/// document wholesale (no merge), and both storage backends hold the
/// same shape: the options store as a structured value, the canonical
/// file as pretty-printed JSON. `identifiers` and `sellers` are always
/// present, possibly empty, and preserve insertion order.
///
/// # Example
///
/// ```rust
/// use sellers_json_sdk::models::Document;
///
/// let doc = Document::default();
/// assert_eq!(doc.version, "1.0");
/// assert!(doc.sellers.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Contact email for inquiries about the registry
    #[serde(default)]
    pub contact_email: String,
    /// Postal contact address
    #[serde(default)]
    pub contact_address: String,
    /// Format version
    #[serde(default = "default_version")]
    pub version: String,
    /// Supplementary business identifiers, insertion-ordered
    #[serde(default)]
    pub identifiers: Vec<Identifier>,
    /// Disclosed sellers, insertion-ordered
    #[serde(default)]
    pub sellers: Vec<Seller>,
}

fn default_version() -> String {
    DOCUMENT_VERSION.to_string()
}

impl Default for Document {
    fn default() -> Self {
        Self {
            contact_email: String::new(),
            contact_address: String::new(),
            version: DOCUMENT_VERSION.to_string(),
            identifiers: Vec::new(),
            sellers: Vec::new(),
        }
    }
}

/// Top-level document fields, for single-value lookups through the
/// reader without stringly-typed key matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentField {
    ContactEmail,
    ContactAddress,
    Version,
    Identifiers,
    Sellers,
}

impl DocumentField {
    /// The field's key in the persisted JSON shape
    pub fn key(self) -> &'static str {
        match self {
            Self::ContactEmail => "contact_email",
            Self::ContactAddress => "contact_address",
            Self::Version => "version",
            Self::Identifiers => "identifiers",
            Self::Sellers => "sellers",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Identifier, SellerType, seller::Seller};

    #[test]
    fn test_document_default() {
        let doc = Document::default();
        assert_eq!(doc.version, DOCUMENT_VERSION);
        assert!(doc.contact_email.is_empty());
        assert!(doc.identifiers.is_empty());
        assert!(doc.sellers.is_empty());
    }

    #[test]
    fn test_document_serialization_roundtrip() {
        let doc = Document {
            contact_email: "ads@example.com".to_string(),
            contact_address: "1 Main St".to_string(),
            version: DOCUMENT_VERSION.to_string(),
            identifiers: vec![Identifier::new("DUNS", "123")],
            sellers: vec![Seller {
                seller_id: "abc".to_string(),
                name: "Acme".to_string(),
                domain: "acme.com".to_string(),
                seller_type: SellerType::Publisher,
                is_confidential: false,
                is_passthrough: true,
                comment: String::new(),
            }],
        };

        let json = serde_json::to_string_pretty(&doc).unwrap();
        let parsed: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, parsed);
    }

    #[test]
    fn test_missing_lists_read_as_empty() {
        let parsed: Document =
            serde_json::from_str(r#"{"contact_email":"a@b.co","contact_address":""}"#).unwrap();
        assert!(parsed.identifiers.is_empty());
        assert!(parsed.sellers.is_empty());
        assert_eq!(parsed.version, DOCUMENT_VERSION);
    }

    #[test]
    fn test_pretty_json_keeps_slashes_unescaped() {
        let doc = Document {
            contact_address: "https://example.com/contact".to_string(),
            ..Document::default()
        };
        let json = serde_json::to_string_pretty(&doc).unwrap();
        assert!(json.contains("https://example.com/contact"));
        assert!(!json.contains("\\/"));
    }
}
