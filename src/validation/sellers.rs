//! Seller row validation
//!
//! A seller row is validated as a whole, against its own confidentiality
//! flag: the caller passes the complete normalized row, never a lone
//! field correlated by position. Requiredness dispatches on
//! [`SellerField`] variants rather than field-name strings.

use std::fmt;

use thiserror::Error;

use crate::models::SellerType;

/// Seller fields subject to requiredness rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellerField {
    SellerId,
    Name,
    Domain,
    SellerType,
}

impl fmt::Display for SellerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SellerId => "Seller ID",
            Self::Name => "Name",
            Self::Domain => "Domain",
            Self::SellerType => "Seller Type",
        };
        f.write_str(label)
    }
}

/// A requiredness failure on one field of a seller row.
///
/// Rendered messages are suitable for inline display on the offending
/// form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowViolation {
    /// The field is required on every row
    #[error("{0} is required.")]
    Required(SellerField),
    /// The field is required because the row is not confidential
    #[error("{0} is required when \"Is Confidential\" is unchecked.")]
    RequiredWhenDisclosed(SellerField),
}

/// A normalized seller row awaiting validation.
///
/// This is the assembler's intermediate shape: fields are already
/// normalized and the seller id already derived, but nothing has been
/// enforced yet, so `seller_type` may still be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SellerDraft {
    pub seller_id: String,
    pub name: String,
    pub domain: String,
    pub seller_type: Option<SellerType>,
    pub is_confidential: bool,
    pub is_passthrough: bool,
    pub comment: String,
}

/// Validate one seller row.
///
/// Returns every violation on the row (empty means valid):
///
/// - `seller_id` and `seller_type` are required unconditionally;
/// - `name` and `domain` are required unless the row's own
///   `is_confidential` flag is set.
///
/// # Examples
///
/// ```rust
/// use sellers_json_sdk::models::SellerType;
/// use sellers_json_sdk::validation::{SellerDraft, validate_seller};
///
/// let confidential = SellerDraft {
///     seller_id: "abc123".to_string(),
///     seller_type: Some(SellerType::Publisher),
///     is_confidential: true,
///     ..SellerDraft::default()
/// };
/// assert!(validate_seller(&confidential).is_empty());
/// ```
pub fn validate_seller(draft: &SellerDraft) -> Vec<RowViolation> {
    let mut violations = Vec::new();

    if draft.seller_id.is_empty() {
        violations.push(RowViolation::Required(SellerField::SellerId));
    }

    if draft.seller_type.is_none() {
        violations.push(RowViolation::Required(SellerField::SellerType));
    }

    if !draft.is_confidential {
        if draft.name.is_empty() {
            violations.push(RowViolation::RequiredWhenDisclosed(SellerField::Name));
        }
        if draft.domain.is_empty() {
            violations.push(RowViolation::RequiredWhenDisclosed(SellerField::Domain));
        }
    }

    violations
}
