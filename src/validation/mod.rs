//! Validation functionality
//!
//! Provides the conditional-requiredness rules applied to each seller
//! row before it is admitted into the document.

pub mod sellers;

pub use sellers::{RowViolation, SellerDraft, SellerField, validate_seller};
