//! Snapshot extraction from decoded save documents.
//!
//! Navigation is schema-less: every path segment lookup yields `Option`, and
//! any absent key or non-mapping intermediate collapses the whole lookup to
//! `None`. Extraction never fails; unusable data is skipped.

pub mod backpack;
pub mod config;
pub mod unknown;

pub use backpack::extract_serials;
pub use config::ExtractorConfig;
pub use unknown::extract_unknown_serials;

use serde_yaml::{Mapping, Sequence, Value};

/// See through any YAML tags to the underlying scalar, sequence or mapping.
pub fn untag(value: &Value) -> &Value {
    let mut current = value;
    while let Value::Tagged(tagged) = current {
        current = &tagged.value;
    }
    current
}

/// Look up `key` when `value` is a mapping.
fn child<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match untag(value) {
        Value::Mapping(mapping) => mapping.get(key),
        _ => None,
    }
}

/// Follow a chain of mapping keys from `value`.
fn descend<'a, 'k>(
    value: &'a Value,
    path: impl IntoIterator<Item = &'k str>,
) -> Option<&'a Value> {
    path.into_iter().try_fold(value, |node, key| child(node, key))
}

/// The two container shapes a save uses for item lists.
#[derive(Debug, Clone, Copy)]
enum Container<'a> {
    /// Ordered sequence of members
    List(&'a Sequence),
    /// Mapping keyed by slot name or by the member itself
    Keyed(&'a Mapping),
}

impl<'a> Container<'a> {
    fn resolve(value: &'a Value) -> Option<Self> {
        match untag(value) {
            Value::Sequence(seq) => Some(Container::List(seq)),
            Value::Mapping(map) => Some(Container::Keyed(map)),
            _ => None,
        }
    }

    /// Sequence items, or mapping values
    fn values(self) -> Box<dyn Iterator<Item = &'a Value> + 'a> {
        match self {
            Container::List(seq) => Box::new(seq.iter()),
            Container::Keyed(map) => Box::new(map.values()),
        }
    }

    /// Sequence items, or mapping keys
    fn members(self) -> Box<dyn Iterator<Item = &'a Value> + 'a> {
        match self {
            Container::List(seq) => Box::new(seq.iter()),
            Container::Keyed(map) => Box::new(map.keys()),
        }
    }
}

/// Stringified identity for a serial-like scalar, if it is truthy.
///
/// Only non-empty strings and non-zero integers qualify; floats and booleans
/// never do.
fn serial_key(value: &Value) -> Option<String> {
    match untag(value) {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if (n.is_i64() || n.is_u64()) && n.as_i64() != Some(0) => {
            Some(n.to_string())
        }
        _ => None,
    }
}
