//! Command orchestration layer.

pub mod analyze;
