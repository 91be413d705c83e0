//! Lifecycle logging macros
//!
//! Every command logs one `start` event and exactly one of `end` or
//! `end_error`. Extra `key = value` fields are forwarded to `tracing` as-is.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use serialdiff_core::log_op_start;
/// log_op_start!("analyze");
/// log_op_start!("analyze", original = "5.yaml", live = "5_live.yaml");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = serialdiff_core_types::schema::EVENT_START,
            $($($field)*)?
        );
    };
}

/// Log the successful end of an operation with its elapsed time
///
/// # Example
///
/// ```
/// # use serialdiff_core::log_op_end;
/// log_op_end!("analyze", duration_ms = 42, removed_count = 0u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = serialdiff_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        );
    };
}

/// Log a failed operation
///
/// Accepts anything convertible into [`ExError`](crate::errors::ExError).
/// Besides the error kind and code, the event carries the snapshot role
/// (`original` / `live`) and document path when the error has them.
///
/// # Example
///
/// ```
/// # use serialdiff_core::log_op_error;
/// # use serialdiff_core::errors::{ExError, SerialDiffError};
/// let err = ExError::from(SerialDiffError::DocumentMalformed {
///     reason: "bad indent".to_string(),
/// })
/// .with_snapshot("live");
/// log_op_error!("analyze", err, duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = serialdiff_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            snapshot = ex_err.snapshot(),
            path = ex_err.path(),
            $($($field)*)?
        );
    }};
}
