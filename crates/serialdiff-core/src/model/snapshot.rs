//! Snapshot containers built by the extractor.

use crate::model::state_flags::StateFlags;
use std::collections::{HashMap, HashSet};

/// One extracted `(serial, state_flags)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SerialRecord {
    pub serial: String,
    pub state_flags: StateFlags,
}

/// Insertion-ordered mapping from serial to status.
///
/// A serial appears at most once. Re-inserting a serial replaces its status
/// but keeps the position of the first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotMap {
    records: Vec<SerialRecord>,
    index: HashMap<String, usize>,
}

impl SnapshotMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a serial's status. Returns the replaced status, if any.
    pub fn insert(&mut self, serial: String, state_flags: StateFlags) -> Option<StateFlags> {
        if let Some(&pos) = self.index.get(&serial) {
            let previous = std::mem::replace(&mut self.records[pos].state_flags, state_flags);
            return Some(previous);
        }
        self.index.insert(serial.clone(), self.records.len());
        self.records.push(SerialRecord {
            serial,
            state_flags,
        });
        None
    }

    pub fn get(&self, serial: &str) -> Option<&StateFlags> {
        self.index
            .get(serial)
            .map(|&pos| &self.records[pos].state_flags)
    }

    pub fn contains(&self, serial: &str) -> bool {
        self.index.contains_key(serial)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SerialRecord> {
        self.records.iter()
    }

    /// Serials in insertion order
    pub fn serials(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.serial.as_str())
    }
}

impl<S: Into<String>, F: Into<StateFlags>> FromIterator<(S, F)> for SnapshotMap {
    fn from_iter<I: IntoIterator<Item = (S, F)>>(iter: I) -> Self {
        let mut map = SnapshotMap::new();
        for (serial, state_flags) in iter {
            map.insert(serial.into(), state_flags.into());
        }
        map
    }
}

/// Serials explicitly flagged as unknown by the live snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnknownSet {
    serials: HashSet<String>,
}

impl UnknownSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, serial: impl Into<String>) -> bool {
        self.serials.insert(serial.into())
    }

    pub fn contains(&self, serial: &str) -> bool {
        self.serials.contains(serial)
    }

    pub fn len(&self) -> usize {
        self.serials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.serials.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for UnknownSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            serials: iter.into_iter().map(Into::into).collect(),
        }
    }
}
