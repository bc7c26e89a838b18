//! Document assembly
//!
//! Merges the raw contact fields, identifier rows, and seller rows of a
//! form submission into one canonical [`Document`]: every scalar is
//! normalized, seller ids are derived where a network code was entered,
//! and rows failing their requiredness rules are dropped rather than
//! failing the submission. Dropped rows are reported back to the caller
//! so the screen can tell the operator what was skipped.

use tracing::debug;

use crate::codec;
use crate::models::{DOCUMENT_VERSION, Document, Identifier, Seller, SellerType, SellersSubmission};
use crate::normalize::{extract_host, flag_enabled, normalize_email, normalize_text};
use crate::validation::{RowViolation, SellerDraft, validate_seller};

/// Assembly behavior toggles
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Derive a missing `seller_id` by encoding the row's network code
    pub derive_seller_ids: bool,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            derive_seller_ids: true,
        }
    }
}

/// The assembled document plus the rows that did not make it in.
///
/// Skipped rows are indexed by their position in the submission, so the
/// screen can attach messages to the offending rows.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyReport {
    pub document: Document,
    /// Indices of identifier rows dropped for an empty name or value
    pub skipped_identifiers: Vec<usize>,
    /// Seller rows dropped with their requiredness violations
    pub skipped_sellers: Vec<SkippedSeller>,
}

/// One dropped seller row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSeller {
    pub index: usize,
    pub violations: Vec<RowViolation>,
}

/// Assemble a submission with default options.
///
/// See [`assemble_with`].
pub fn assemble(submission: &SellersSubmission) -> AssemblyReport {
    assemble_with(submission, &AssembleOptions::default())
}

/// Assemble a raw form submission into a canonical document.
///
/// Applies the field normalizers to every scalar, keeps identifier rows
/// only when both name and value survive normalization, and keeps seller
/// rows only when they pass [`validate_seller`] against their own
/// confidentiality flag. Row order is preserved for the kept rows, and
/// network codes never reach the document. Assembly itself cannot fail;
/// dropping is the recovery policy.
///
/// # Example
///
/// ```rust
/// use sellers_json_sdk::assemble::assemble;
/// use sellers_json_sdk::models::{RawIdentifier, SellersSubmission};
///
/// let submission = SellersSubmission {
///     identifiers: vec![
///         RawIdentifier::new("TAG-ID", ""),
///         RawIdentifier::new("DUNS", "123"),
///     ],
///     ..SellersSubmission::default()
/// };
///
/// let report = assemble(&submission);
/// assert_eq!(report.document.identifiers.len(), 1);
/// assert_eq!(report.skipped_identifiers, vec![0]);
/// ```
pub fn assemble_with(submission: &SellersSubmission, options: &AssembleOptions) -> AssemblyReport {
    let version = normalize_text(&submission.version);

    let mut document = Document {
        contact_email: normalize_email(&submission.contact_email),
        contact_address: normalize_text(&submission.contact_address),
        version: if version.is_empty() {
            DOCUMENT_VERSION.to_string()
        } else {
            version
        },
        identifiers: Vec::new(),
        sellers: Vec::new(),
    };

    let mut skipped_identifiers = Vec::new();
    for (index, row) in submission.identifiers.iter().enumerate() {
        let name = normalize_text(&row.name);
        let value = normalize_text(&row.value);

        if name.is_empty() || value.is_empty() {
            skipped_identifiers.push(index);
            continue;
        }

        document.identifiers.push(Identifier { name, value });
    }

    let mut skipped_sellers = Vec::new();
    for (index, row) in submission.sellers.iter().enumerate() {
        let draft = draft_seller(row, options);
        let violations = validate_seller(&draft);

        match (violations.is_empty(), draft.seller_type) {
            (true, Some(seller_type)) => document.sellers.push(Seller {
                seller_id: draft.seller_id,
                name: draft.name,
                domain: draft.domain,
                seller_type,
                is_confidential: draft.is_confidential,
                is_passthrough: draft.is_passthrough,
                comment: draft.comment,
            }),
            _ => {
                debug!(index, ?violations, "dropping seller row");
                skipped_sellers.push(SkippedSeller { index, violations });
            }
        }
    }

    AssemblyReport {
        document,
        skipped_identifiers,
        skipped_sellers,
    }
}

/// Normalize one raw seller row into a validation draft.
fn draft_seller(row: &crate::models::RawSeller, options: &AssembleOptions) -> SellerDraft {
    let direct_id = normalize_text(&row.seller_id);
    let network_code = normalize_text(&row.network_code);

    let seller_id = if !direct_id.is_empty() {
        direct_id
    } else if options.derive_seller_ids && !network_code.is_empty() {
        codec::encode(&network_code)
    } else {
        String::new()
    };

    SellerDraft {
        seller_id,
        name: normalize_text(&row.name),
        domain: extract_host(&row.domain),
        seller_type: SellerType::parse(&row.seller_type),
        is_confidential: flag_enabled(row.is_confidential.as_ref(), &row.flags, "is_confidential"),
        is_passthrough: flag_enabled(row.is_passthrough.as_ref(), &row.flags, "is_passthrough"),
        comment: normalize_text(&row.comment),
    }
}
