//! Sellers JSON SDK - Core library for maintaining a sellers registry
//!
//! Provides the normalization, validation, and dual-persistence pipeline
//! behind an advertising-disclosure settings screen:
//! - Field normalization (text/email/host/flag coercion)
//! - Per-row seller validation with conditional requiredness
//! - Document assembly from raw form submissions
//! - Dual persistence (options store + canonical sellers.json file)
//! - Cached reads preferring the canonical file
//! - Seller-id encoding/decoding
//!
//! The admin screen itself (rendering, menus, field widgets) is an
//! external collaborator: it submits raw values to [`assemble`] and
//! persists the result through [`DocumentSaver`].

pub mod assemble;
pub mod codec;
pub mod document;
pub mod models;
pub mod normalize;
pub mod storage;
pub mod validation;

// Re-export commonly used types
pub use assemble::{AssembleOptions, AssemblyReport, SkippedSeller, assemble, assemble_with};
pub use codec::CodecError;
pub use document::{DocumentReader, DocumentSaver, FileWriteStatus, SaveReport};
pub use storage::mirror::{MirrorStatus, SELLERS_FILE_NAME, SellersFile};
pub use storage::{DRAFT_OPTION_KEYS, OPTION_KEY, OptionsStore, StorageError};
pub use validation::{RowViolation, SellerDraft, SellerField, validate_seller};

// Re-export models
pub use models::{DOCUMENT_VERSION, Document, DocumentField, Identifier, Seller, SellerType};
pub use models::{RawIdentifier, RawSeller, SellersSubmission};
