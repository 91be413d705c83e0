//! Error handling for serialdiff-store
//!
//! Wraps serialdiff-core ExError with store-specific helpers

use serialdiff_core::errors::{ExError, SerialDiffError};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an unreadable-document error
pub fn document_unreadable(path: &Path, err: std::io::Error) -> ExError {
    ExError::from(SerialDiffError::DocumentUnreadable {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
    .with_op("load_document")
}

/// Create a malformed-document error
pub fn document_malformed(err: serde_yaml::Error) -> ExError {
    ExError::from(SerialDiffError::DocumentMalformed {
        reason: err.to_string(),
    })
    .with_op("decode_document")
}

/// Create an unsupported-tag error
pub fn unsupported_tag(tag: &str) -> ExError {
    ExError::from(SerialDiffError::UnsupportedTag {
        tag: tag.to_string(),
    })
    .with_op("decode_document")
}

/// Create an invalid-option error
pub fn invalid_input(reason: &str) -> ExError {
    ExError::from(SerialDiffError::InvalidInput {
        reason: reason.to_string(),
    })
}

/// Create a report write error
pub fn report_write(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::from(SerialDiffError::ReportWrite {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
    .with_op(operation.to_string())
}
