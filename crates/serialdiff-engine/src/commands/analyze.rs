//! Snapshot analysis command with boundary logging.
//!
//! ## Pipeline
//! 1. Load and decode the original document
//! 2. Load and decode the live document
//! 3. Extract backpack serials from both, unknown listing from live
//! 4. Classify
//! 5. Render, and write when an output path is set
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for `analyze`:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

#![allow(clippy::result_large_err)]

use serialdiff_core::diff::{classify, render_report, AnalysisResult, ReportFormat};
use serialdiff_core::extract::{extract_serials, extract_unknown_serials, ExtractorConfig};
use serialdiff_core::model::SnapshotMap;
use serialdiff_core::{log_op_end, log_op_error, log_op_start};
use serialdiff_core_types::schema::{SNAPSHOT_LIVE, SNAPSHOT_ORIGINAL};
use serialdiff_store::errors::Result;
use serialdiff_store::{load_document, write_report, DecodeOptions};
use std::path::{Path, PathBuf};

/// Options for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Earlier save document
    pub original_path: PathBuf,
    /// Later save document; also supplies the unknown listing
    pub live_path: PathBuf,
    /// Report destination. `None` leaves output to the caller.
    pub output_path: Option<PathBuf>,
    pub decode: DecodeOptions,
    pub extractor: ExtractorConfig,
    pub format: ReportFormat,
}

impl AnalyzeOptions {
    /// Options with default decoding, extraction and text output.
    pub fn new(original_path: impl Into<PathBuf>, live_path: impl Into<PathBuf>) -> Self {
        Self {
            original_path: original_path.into(),
            live_path: live_path.into(),
            output_path: None,
            decode: DecodeOptions::default(),
            extractor: ExtractorConfig::default(),
            format: ReportFormat::default(),
        }
    }
}

/// Result of a completed analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzeOutcome {
    pub result: AnalysisResult,
    /// Rendered report in the requested format
    pub report: String,
    /// Where the report was written, if anywhere
    pub written_to: Option<PathBuf>,
}

/// Compare the original and live documents and render the report.
///
/// ## Errors
///
/// - `DocumentUnreadable`: a document file is missing or unreadable
/// - `InvalidDocument`: a document is not valid YAML
/// - `UnsupportedTag`: a tag is rejected by the decode options
/// - `Serialization`: JSON rendering failed
/// - `ReportWrite`: the report could not be written to `output_path`
pub fn analyze(options: &AnalyzeOptions) -> Result<AnalyzeOutcome> {
    log_op_start!(
        "analyze",
        original = %options.original_path.display(),
        live = %options.live_path.display()
    );
    let start = std::time::Instant::now();

    let outcome = analyze_impl(options).map_err(|e| {
        log_op_error!(
            "analyze",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "analyze",
        duration_ms = start.elapsed().as_millis() as u64,
        new_count = outcome.result.new_total(),
        modified_count = outcome.result.modified.len(),
        removed_count = outcome.result.removed.len()
    );

    Ok(outcome)
}

fn analyze_impl(options: &AnalyzeOptions) -> Result<AnalyzeOutcome> {
    let original_doc = load_document(&options.original_path, &options.decode)
        .map_err(|e| e.with_snapshot(SNAPSHOT_ORIGINAL))?;
    let live_doc = load_document(&options.live_path, &options.decode)
        .map_err(|e| e.with_snapshot(SNAPSHOT_LIVE))?;

    let original = extract_serials(&original_doc, &options.extractor);
    let live = extract_serials(&live_doc, &options.extractor);
    let unknown = extract_unknown_serials(&live_doc, &options.extractor);
    log_snapshot(SNAPSHOT_ORIGINAL, &options.original_path, &original);
    log_snapshot(SNAPSHOT_LIVE, &options.live_path, &live);

    let result = classify(&original, &live, &unknown);
    let report = render_report(&result, options.format)?;

    if let Some(path) = &options.output_path {
        write_report(path, &report)?;
    }

    Ok(AnalyzeOutcome {
        result,
        report,
        written_to: options.output_path.clone(),
    })
}

fn log_snapshot(role: &str, path: &Path, serials: &SnapshotMap) {
    tracing::debug!(
        snapshot = role,
        path = %path.display(),
        serial_count = serials.len(),
        "extracted snapshot"
    );
}
