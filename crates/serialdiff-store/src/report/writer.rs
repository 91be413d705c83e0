//! Rendered report output

use crate::errors::Result;
use crate::report::atomic::atomic_write;
use std::path::Path;

/// Write a rendered report to `path`.
///
/// # Errors
///
/// - `ReportWrite`: the report file could not be written
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    atomic_write(path, report.as_bytes())?;
    tracing::debug!(path = %path.display(), bytes = report.len(), "wrote report");
    Ok(())
}
