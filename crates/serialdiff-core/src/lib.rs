//! serialdiff core - snapshot extraction and classification
//!
//! This crate provides:
//! - The extracted snapshot model (`SnapshotMap`, `StateFlags`, `UnknownSet`)
//! - Schema-less extraction of backpack serials from decoded save documents
//! - Classification of serials across an original and a live snapshot
//! - Text and JSON report rendering
//! - The error and logging facilities shared by the other crates

pub mod diff;
pub mod errors;
pub mod extract;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use diff::{classify, AnalysisResult, Bucket, ReportFormat};
pub use errors::{ExError, ExErrorKind, Result, SerialDiffError};
pub use extract::{extract_serials, extract_unknown_serials, ExtractorConfig};
pub use model::{SerialRecord, SnapshotMap, StateFlags, UnknownSet};
