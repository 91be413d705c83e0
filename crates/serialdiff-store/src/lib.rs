//! serialdiff store - document decoding and report persistence
//!
//! Provides:
//! - YAML save-document decoder with an explicit custom-tag policy
//! - Atomic report writer

pub mod document;
pub mod errors;
pub mod report;

// Re-export key types
pub use document::{decode_document_str, load_document, DecodeOptions, TagPolicy};
pub use errors::Result;
pub use report::write_report;
