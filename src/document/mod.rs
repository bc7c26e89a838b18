//! Document persistence
//!
//! Pairs the dual-store save pipeline (`saver`) with the cached read
//! path (`reader`). Both sit on an [`OptionsStore`](crate::storage::OptionsStore)
//! backend and the canonical-file mirror.

pub mod reader;
pub mod saver;

pub use reader::DocumentReader;
pub use saver::{DocumentSaver, FileWriteStatus, SaveReport};
