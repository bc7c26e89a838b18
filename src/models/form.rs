//! Raw form-submission shapes
//!
//! The admin screen submits loosely-typed values keyed by row position.
//! These types are the inbound interface the assembler consumes; every
//! field is optional on the wire and defaults to empty, so a partial or
//! malformed submission still deserializes.

use serde::{Deserialize, Serialize};

/// A full settings-form submission: contact fields plus the identifier
/// and seller rows in the order the operator entered them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SellersSubmission {
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_address: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub identifiers: Vec<RawIdentifier>,
    #[serde(default)]
    pub sellers: Vec<RawSeller>,
}

/// One submitted identifier row
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawIdentifier {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl RawIdentifier {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One submitted seller row.
///
/// `seller_id` may be entered directly, or left empty with a
/// `network_code` for the assembler to encode. The boolean flags arrive
/// in whichever representation the form revision used: a loosely-typed
/// value per flag (bool, 0/1, "0"/"1"), or flag names collected in the
/// `flags` set. Both normalize to the same two named flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawSeller {
    #[serde(default)]
    pub seller_id: String,
    #[serde(default)]
    pub network_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub seller_type: String,
    #[serde(default)]
    pub is_confidential: Option<serde_json::Value>,
    #[serde(default)]
    pub is_passthrough: Option<serde_json::Value>,
    /// Selected flag names, for the checkbox-group form revision
    #[serde(default)]
    pub flags: Vec<String>,
    #[serde(default)]
    pub comment: String,
}
