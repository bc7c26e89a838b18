//! Seller model

use serde::{Deserialize, Serialize};

/// Role a seller plays for the disclosed inventory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SellerType {
    /// Owns and operates the inventory
    Publisher,
    /// Resells inventory on behalf of others
    Intermediary,
    /// Acts as both publisher and intermediary
    Both,
}

impl SellerType {
    /// Parse a submitted select value.
    ///
    /// An empty or unrecognized value yields `None`; the validator
    /// reports the missing field.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "PUBLISHER" => Some(Self::Publisher),
            "INTERMEDIARY" => Some(Self::Intermediary),
            "BOTH" => Some(Self::Both),
            _ => None,
        }
    }

    /// The wire representation of this value
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Publisher => "PUBLISHER",
            Self::Intermediary => "INTERMEDIARY",
            Self::Both => "BOTH",
        }
    }
}

/// One disclosed inventory participant in the sellers document.
///
/// A persisted seller always has a non-empty `seller_id` and a
/// `seller_type`, and carries a non-empty `name` and `domain` unless the
/// row is confidential. The internal network code a seller id may have
/// been derived from is never part of this record.
///
/// The boolean flags and the comment follow the sparse output
/// convention: they are serialized only when set, and absent values read
/// back as false/empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seller {
    /// Public seller identifier
    pub seller_id: String,
    /// Seller legal name; may be empty on confidential rows
    #[serde(default)]
    pub name: String,
    /// Bare hostname of the seller's site; may be empty on confidential rows
    #[serde(default)]
    pub domain: String,
    /// Role of the seller for this inventory
    pub seller_type: SellerType,
    /// Withholds name/domain from disclosure when true
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_confidential: bool,
    /// Informational passthrough flag, no validation impact
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_passthrough: bool,
    /// Optional free-text description of the inventory
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

fn is_false(b: &bool) -> bool {
    !*b
}
