//! Report rendering for analysis results.

use crate::diff::model::{AnalysisResult, Bucket, BucketCounts};
use crate::errors::{ExError, Result, SerialDiffError};
use serde::Serialize;

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable sectioned text
    #[default]
    Text,
    /// Pretty-printed JSON of every bucket plus counts
    Json,
}

/// Render an [`AnalysisResult`] in the requested format.
///
/// # Errors
///
/// - `Serialization`: JSON encoding failed
pub fn render_report(result: &AnalysisResult, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text_report(result)),
        ReportFormat::Json => render_json_report(result),
    }
}

/// Render the human-readable text report.
///
/// Each bucket gets a `--- TITLE (count) ---` header, one line per entry and
/// a blank separator line. Buckets always appear, even when empty.
pub fn render_text_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let title = "Serial Analysis Report:";
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push_str("\n\n");

    for bucket in Bucket::ALL {
        out.push_str(&format!(
            "--- {} ({}) ---\n",
            bucket.title(),
            result.len_of(bucket)
        ));
        match result.serials(bucket) {
            Some(serials) => {
                for serial in serials {
                    out.push_str(serial);
                    out.push('\n');
                }
            }
            None => {
                for m in &result.modified {
                    out.push_str(&format!(
                        "Serial: {}, Original State: {}, New State: {}\n",
                        m.serial, m.original_state, m.new_state
                    ));
                }
            }
        }
        out.push('\n');
    }

    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a AnalysisResult,
    counts: BucketCounts,
}

/// Render the buckets and their counts as pretty-printed JSON.
///
/// # Errors
///
/// - `Serialization`: a status value could not be encoded as JSON
pub fn render_json_report(result: &AnalysisResult) -> Result<String> {
    let report = JsonReport {
        result,
        counts: result.counts(),
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| ExError::from(SerialDiffError::from(e)).with_op("render_json_report"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::ModifiedSerial;
    use crate::model::StateFlags;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            new_working: vec!["S3".into()],
            modified: vec![ModifiedSerial {
                serial: "S2".into(),
                original_state: StateFlags::from(17),
                new_state: StateFlags::Missing,
            }],
            unmodified: vec!["S1".into()],
            ..AnalysisResult::default()
        }
    }

    #[test]
    fn test_text_report_layout() {
        let text = render_text_report(&sample());
        let expected = "\
Serial Analysis Report:
=======================

--- NEW WORKING (1) ---
S3

--- NEW VIEWED VALUABLE (0) ---

--- NEW BROKEN (0) ---

--- NEW UNKNOWN (0) ---

--- NEW LOW VALUE (0) ---

--- MODIFIED (1) ---
Serial: S2, Original State: 17, New State: None

--- REMOVED (0) ---

--- UNMODIFIED (1) ---
S1

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_json_report_fields() {
        let json = render_json_report(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["new_working"], serde_json::json!(["S3"]));
        assert_eq!(value["modified"][0]["serial"], "S2");
        assert_eq!(value["modified"][0]["original_state"], 17);
        assert!(value["modified"][0]["new_state"].is_null());
        assert_eq!(value["counts"]["unmodified"], 1);
    }

    #[test]
    fn test_render_report_dispatch() {
        let result = sample();
        assert_eq!(
            render_report(&result, ReportFormat::Text).unwrap(),
            render_text_report(&result)
        );
        assert!(render_report(&result, ReportFormat::Json)
            .unwrap()
            .starts_with('{'));
    }
}
