//! serialdiff engine - orchestration layer
//!
//! Provides the `analyze` command, which coordinates document loading
//! (store), extraction and classification (core), and report output.

pub mod commands;

pub use commands::analyze::{analyze, AnalyzeOptions, AnalyzeOutcome};
