use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every hard failure of an analysis run maps to one of these kinds. Each kind
/// has a stable error code usable for programmatic handling and test
/// assertions. Malformed-but-partial document content never produces an
/// error; the extractor skips it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,
    /// Document text could not be decoded at all
    InvalidDocument,
    /// Document file is absent or unreadable
    DocumentUnreadable,
    /// A custom tag not admitted by the active tag policy
    UnsupportedTag,

    // Output
    ReportWrite,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidDocument => "ERR_INVALID_DOCUMENT",
            ExErrorKind::DocumentUnreadable => "ERR_DOCUMENT_UNREADABLE",
            ExErrorKind::UnsupportedTag => "ERR_UNSUPPORTED_TAG",
            ExErrorKind::ReportWrite => "ERR_REPORT_WRITE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, file path, snapshot role) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    snapshot: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            snapshot: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add snapshot role context ("original" or "live")
    pub fn with_snapshot(mut self, snapshot: impl Into<String>) -> Self {
        self.snapshot = Some(snapshot.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(snapshot) = &self.snapshot {
            write!(f, " (snapshot: {})", snapshot)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for serialdiff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SerialDiffError {
    /// Document file could not be read
    #[error("Cannot read document {path}: {reason}")]
    DocumentUnreadable { path: String, reason: String },

    /// Document text is not valid YAML
    #[error("Cannot decode document: {reason}")]
    DocumentMalformed { reason: String },

    /// Tag outside the configured flatten list
    #[error("Unsupported tag {tag}")]
    UnsupportedTag { tag: String },

    /// Report could not be written
    #[error("Cannot write report {path}: {reason}")]
    ReportWrite { path: String, reason: String },

    /// Serialization error (JSON encoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Invalid caller-supplied option
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl From<SerialDiffError> for ExError {
    fn from(err: SerialDiffError) -> Self {
        match err {
            SerialDiffError::DocumentUnreadable { path, reason } => {
                ExError::new(ExErrorKind::DocumentUnreadable)
                    .with_path(path)
                    .with_message(reason)
            }
            SerialDiffError::DocumentMalformed { reason } => {
                ExError::new(ExErrorKind::InvalidDocument).with_message(reason)
            }
            SerialDiffError::UnsupportedTag { tag } => ExError::new(ExErrorKind::UnsupportedTag)
                .with_message(format!("tag {} is not in the flatten list", tag)),
            SerialDiffError::ReportWrite { path, reason } => ExError::new(ExErrorKind::ReportWrite)
                .with_path(path)
                .with_message(reason),
            SerialDiffError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            SerialDiffError::InvalidInput { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }
        }
    }
}

/// Conversion from serde_json::Error to SerialDiffError
impl From<serde_json::Error> for SerialDiffError {
    fn from(err: serde_json::Error) -> Self {
        SerialDiffError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidDocument, "ERR_INVALID_DOCUMENT"),
            (ExErrorKind::DocumentUnreadable, "ERR_DOCUMENT_UNREADABLE"),
            (ExErrorKind::UnsupportedTag, "ERR_UNSUPPORTED_TAG"),
            (ExErrorKind::ReportWrite, "ERR_REPORT_WRITE"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_context() {
        let err = ExError::new(ExErrorKind::DocumentUnreadable)
            .with_op("load_document")
            .with_snapshot("live")
            .with_path("output.yaml")
            .with_message("No such file or directory");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_DOCUMENT_UNREADABLE]"));
        assert!(text.contains("'load_document'"));
        assert!(text.contains("(snapshot: live)"));
        assert!(text.contains("(path: output.yaml)"));
    }

    #[test]
    fn test_serde_json_error_becomes_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SerialDiffError = json_err.into();
        assert!(matches!(err, SerialDiffError::Serialization { .. }));
    }
}
