#![allow(clippy::unwrap_used, clippy::expect_used)]

use serialdiff_core::errors::{ExError, SerialDiffError};
use serialdiff_core::logging_facility::test_capture::init_test_capture;
use serialdiff_core::{log_op_end, log_op_error, log_op_start};
use serialdiff_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = SerialDiffError::DocumentUnreadable {
        path: "missing.yaml".to_string(),
        reason: "No such file".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(
        error_events[0].fields.get(FIELD_ERR_CODE),
        Some(&"ERR_DOCUMENT_UNREADABLE".to_string())
    );
}

#[test]
fn test_start_end_pair_with_fields() {
    let capture = init_test_capture();
    let op_name = "test_start_end_pair_unique_4";

    log_op_start!(op_name, original = "5.yaml");
    log_op_end!(op_name, duration_ms = 1, serial_count = 12u64);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].fields.get("original"), Some(&"5.yaml".to_string()));
    assert_eq!(events[1].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[1].fields.get("serial_count"), Some(&"12".to_string()));
}

#[test]
fn test_log_op_error_carries_snapshot_and_path() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_snapshot_unique_7";

    let err = ExError::from(SerialDiffError::DocumentMalformed {
        reason: "bad indent".to_string(),
    })
    .with_snapshot("live")
    .with_path("5_live.yaml");
    log_op_error!(op_name, err, duration_ms = 2);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].fields.get("snapshot"), Some(&"live".to_string()));
    assert_eq!(events[0].fields.get("path"), Some(&"5_live.yaml".to_string()));
    assert_eq!(
        events[0].fields.get(FIELD_ERR_CODE),
        Some(&"ERR_INVALID_DOCUMENT".to_string())
    );
}

#[test]
fn test_log_op_error_omits_absent_context() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_no_context_unique_8";

    let err = SerialDiffError::InvalidInput {
        reason: "tag name \"!\" is empty".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 0);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert!(!events[0].fields.contains_key("snapshot"));
    assert!(!events[0].fields.contains_key("path"));
}
