//! Backpack serial extraction.

use crate::extract::{descend, serial_key, untag, Container, ExtractorConfig};
use crate::model::{SnapshotMap, StateFlags};
use serde_yaml::Value;

/// Extract the serial → state_flags mapping from one save document.
///
/// Returns an empty map when the backpack path is absent, passes through a
/// non-mapping, or ends in something other than a sequence or mapping.
/// Entries that are not mappings, or whose serial is absent or empty, are
/// skipped. A missing status is recorded as [`StateFlags::Missing`].
///
/// # Example
///
/// ```
/// use serialdiff_core::extract::{extract_serials, ExtractorConfig};
///
/// let doc: serde_yaml::Value = serde_yaml::from_str(
///     "state:\n  inventory:\n    items:\n      backpack:\n        - serial: A1\n          state_flags: 3\n",
/// )
/// .unwrap();
/// let serials = extract_serials(&doc, &ExtractorConfig::default());
/// assert_eq!(serials.len(), 1);
/// ```
pub fn extract_serials(document: &Value, config: &ExtractorConfig) -> SnapshotMap {
    let mut serials = SnapshotMap::new();

    let Some(backpack) = descend(document, config.backpack_keys()).and_then(Container::resolve)
    else {
        tracing::debug!("backpack not found, snapshot is empty");
        return serials;
    };

    let mut skipped = 0usize;
    for entry in backpack.values() {
        if !record_entry(&mut serials, entry, config) {
            skipped += 1;
        }
    }

    tracing::debug!(
        serial_count = serials.len(),
        skipped_count = skipped,
        "extracted backpack serials"
    );
    serials
}

/// Record one item entry. Returns false when the entry was skipped.
fn record_entry(serials: &mut SnapshotMap, entry: &Value, config: &ExtractorConfig) -> bool {
    let Value::Mapping(item) = untag(entry) else {
        return false;
    };
    let Some(serial) = item.get(config.serial_field.as_str()).and_then(serial_key) else {
        return false;
    };
    let state_flags = StateFlags::from_field(item.get(config.state_field.as_str()));
    serials.insert(serial, state_flags);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> SnapshotMap {
        let doc: Value = serde_yaml::from_str(text).unwrap();
        extract_serials(&doc, &ExtractorConfig::default())
    }

    #[test]
    fn test_list_backpack() {
        let map = extract(
            r#"
state:
  inventory:
    items:
      backpack:
        - serial: "@A"
          state_flags: 3
        - serial: "@B"
          state_flags: 17
"#,
        );
        assert_eq!(map.serials().collect::<Vec<_>>(), vec!["@A", "@B"]);
        assert_eq!(map.get("@B"), Some(&StateFlags::from(17)));
    }

    #[test]
    fn test_keyed_backpack_ignores_slot_names() {
        let map = extract(
            r#"
state:
  inventory:
    items:
      backpack:
        slot_0:
          serial: "@A"
          state_flags: 1
        slot_1:
          serial: "@B"
"#,
        );
        assert_eq!(map.serials().collect::<Vec<_>>(), vec!["@A", "@B"]);
        assert_eq!(map.get("@B"), Some(&StateFlags::Missing));
    }

    #[test]
    fn test_scalar_backpack_is_empty() {
        assert!(extract("state:\n  inventory:\n    items:\n      backpack: 5\n").is_empty());
        assert!(extract("state:\n  inventory:\n    items:\n      backpack: null\n").is_empty());
    }

    #[test]
    fn test_missing_path_is_empty() {
        assert!(extract("state:\n  inventory: {}\n").is_empty());
        assert!(extract("state: [1, 2]\n").is_empty());
        assert!(extract("null").is_empty());
        assert!(extract("just a string").is_empty());
    }

    #[test]
    fn test_skips_non_mapping_and_serialless_entries() {
        let map = extract(
            r#"
state:
  inventory:
    items:
      backpack:
        - plain string
        - [nested, list]
        - state_flags: 3
        - serial: ""
          state_flags: 3
        - serial: "@keep"
          state_flags: 0
"#,
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("@keep"), Some(&StateFlags::from(0)));
    }

    #[test]
    fn test_tagged_backpack_entries() {
        let map = extract(
            r#"
state:
  inventory:
    items:
      backpack: !tags
        slot_0: !tags
          serial: "@T"
          state_flags: 17
"#,
        );
        assert!(map.get("@T").is_some_and(|s| s.is_code(StateFlags::BROKEN)));
    }

    #[test]
    fn test_custom_field_names() {
        let doc: Value = serde_yaml::from_str("save:\n  bag:\n    - id: X\n      flags: 1\n").unwrap();
        let config = ExtractorConfig {
            root_key: "save".to_string(),
            backpack_path: vec!["bag".to_string()],
            serial_field: "id".to_string(),
            state_field: "flags".to_string(),
            ..ExtractorConfig::default()
        };
        let map = extract_serials(&doc, &config);
        assert_eq!(map.get("X"), Some(&StateFlags::from(1)));
    }
}
