//! Models module for the SDK
//!
//! Defines the canonical sellers document, its row types, and the raw
//! form-submission shapes the assembler consumes.

pub mod document;
pub mod form;
pub mod identifier;
pub mod seller;

pub use document::{DOCUMENT_VERSION, Document, DocumentField};
pub use form::{RawIdentifier, RawSeller, SellersSubmission};
pub use identifier::Identifier;
pub use seller::{Seller, SellerType};
