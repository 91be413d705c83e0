//! Snapshot classification.
//!
//! Buckets every serial seen in an original and a live snapshot into one of
//! eight categories and renders the result for review.
//!
//! ## Entry point
//!
//! ```ignore
//! use serialdiff_core::diff::{classify, render_text_report};
//!
//! let result = classify(&original, &live, &unknown);
//! let report = render_text_report(&result);
//! ```
//!
//! ## Guarantees
//!
//! - **Totality**: every serial in either snapshot lands in exactly one bucket.
//! - **Stable order**: buckets keep snapshot order; nothing is sorted.
//! - **Purity**: classification has no side effects beyond debug logging.

pub mod engine;
pub mod model;
pub mod report;

pub use engine::classify;
pub use model::{AnalysisResult, Bucket, BucketCounts, ModifiedSerial};
pub use report::{render_json_report, render_report, render_text_report, ReportFormat};
