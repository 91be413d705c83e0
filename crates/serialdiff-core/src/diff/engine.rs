//! Snapshot classification engine.
//!
//! The entry point is [`classify`], which buckets every serial seen in either
//! snapshot into exactly one category of an [`AnalysisResult`].

use crate::diff::model::{AnalysisResult, ModifiedSerial};
use crate::model::{SnapshotMap, StateFlags, UnknownSet};

/// Classify every serial across an original and a live snapshot.
///
/// Serials only in `live` are tested in order, first match wins:
/// unknown-listed, status 3, status 1, status 17, otherwise low value.
/// Serials in both are `modified` when their statuses differ and
/// `unmodified` otherwise; `unknown` is not consulted for them.
/// Serials only in `original` are `removed`.
///
/// Bucket order follows `live` for everything except `removed`, which
/// follows `original`.
///
/// # Example
///
/// ```
/// use serialdiff_core::diff::classify;
/// use serialdiff_core::model::{SnapshotMap, UnknownSet};
///
/// let original: SnapshotMap = [("S1", 3), ("S2", 17)].into_iter().collect();
/// let live: SnapshotMap = [("S1", 3), ("S2", 1), ("S3", 3)].into_iter().collect();
///
/// let result = classify(&original, &live, &UnknownSet::new());
/// assert_eq!(result.unmodified, vec!["S1"]);
/// assert_eq!(result.new_working, vec!["S3"]);
/// assert_eq!(result.modified[0].serial, "S2");
/// ```
pub fn classify(
    original: &SnapshotMap,
    live: &SnapshotMap,
    unknown: &UnknownSet,
) -> AnalysisResult {
    let mut result = AnalysisResult::default();

    for record in live.iter() {
        let serial = record.serial.clone();
        let live_state = &record.state_flags;

        match original.get(&record.serial) {
            None => {
                let bucket = if unknown.contains(&serial) {
                    &mut result.new_unknown
                } else if live_state.is_code(StateFlags::WORKING) {
                    &mut result.new_working
                } else if live_state.is_code(StateFlags::VIEWED_VALUABLE) {
                    &mut result.new_viewed_valuable
                } else if live_state.is_code(StateFlags::BROKEN) {
                    &mut result.new_broken
                } else {
                    &mut result.new_low_value
                };
                bucket.push(serial);
            }
            Some(original_state) if original_state != live_state => {
                result.modified.push(ModifiedSerial {
                    serial,
                    original_state: original_state.clone(),
                    new_state: live_state.clone(),
                });
            }
            Some(_) => result.unmodified.push(serial),
        }
    }

    result.removed = original
        .serials()
        .filter(|serial| !live.contains(serial))
        .map(str::to_string)
        .collect();

    tracing::debug!(
        new = result.new_total(),
        shared = result.shared_total(),
        removed = result.removed.len(),
        "classified serials"
    );
    result
}
