//! Unknown-serial listing extraction.

use crate::extract::{descend, serial_key, Container, ExtractorConfig};
use crate::model::UnknownSet;
use serde_yaml::Value;

/// Collect the serials a snapshot lists as unknown.
///
/// Reads `state.unknown_items`, either a sequence of serials or a mapping
/// keyed by serial. Empty strings and non-scalar members are skipped. A
/// scalar or absent listing yields an empty set.
pub fn extract_unknown_serials(document: &Value, config: &ExtractorConfig) -> UnknownSet {
    let Some(listing) = descend(document, config.unknown_keys()).and_then(Container::resolve)
    else {
        return UnknownSet::new();
    };

    let unknown: UnknownSet = listing.members().filter_map(serial_key).collect();
    tracing::debug!(unknown_count = unknown.len(), "extracted unknown serials");
    unknown
}
