//! Analysis output types.
//!
//! Bucket vectors keep the order in which serials were encountered; nothing is
//! sorted.

use crate::model::StateFlags;
use serde::Serialize;

/// A serial present in both snapshots whose status changed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModifiedSerial {
    pub serial: String,
    pub original_state: StateFlags,
    pub new_state: StateFlags,
}

/// The categorized comparison of an original and a live snapshot.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AnalysisResult {
    /// New serials with status 3
    pub new_working: Vec<String>,
    /// New serials with status 1
    pub new_viewed_valuable: Vec<String>,
    /// New serials with status 17
    pub new_broken: Vec<String>,
    /// New serials listed as unknown by the live snapshot
    pub new_unknown: Vec<String>,
    /// New serials matching nothing above, including missing status
    pub new_low_value: Vec<String>,
    /// Shared serials whose status differs
    pub modified: Vec<ModifiedSerial>,
    /// Original serials absent from the live snapshot
    pub removed: Vec<String>,
    /// Shared serials with identical status
    pub unmodified: Vec<String>,
}

/// Report buckets in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    NewWorking,
    NewViewedValuable,
    NewBroken,
    NewUnknown,
    NewLowValue,
    Modified,
    Removed,
    Unmodified,
}

impl Bucket {
    /// All buckets in report order
    pub const ALL: [Bucket; 8] = [
        Bucket::NewWorking,
        Bucket::NewViewedValuable,
        Bucket::NewBroken,
        Bucket::NewUnknown,
        Bucket::NewLowValue,
        Bucket::Modified,
        Bucket::Removed,
        Bucket::Unmodified,
    ];

    /// snake_case name, as used in JSON output
    pub fn key(&self) -> &'static str {
        match self {
            Bucket::NewWorking => "new_working",
            Bucket::NewViewedValuable => "new_viewed_valuable",
            Bucket::NewBroken => "new_broken",
            Bucket::NewUnknown => "new_unknown",
            Bucket::NewLowValue => "new_low_value",
            Bucket::Modified => "modified",
            Bucket::Removed => "removed",
            Bucket::Unmodified => "unmodified",
        }
    }

    /// Header text used in the text report
    pub fn title(&self) -> String {
        self.key().replace('_', " ").to_uppercase()
    }

    pub fn is_new(&self) -> bool {
        matches!(
            self,
            Bucket::NewWorking
                | Bucket::NewViewedValuable
                | Bucket::NewBroken
                | Bucket::NewUnknown
                | Bucket::NewLowValue
        )
    }
}

/// Per-bucket sizes of an [`AnalysisResult`].
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct BucketCounts {
    pub new_working: usize,
    pub new_viewed_valuable: usize,
    pub new_broken: usize,
    pub new_unknown: usize,
    pub new_low_value: usize,
    pub modified: usize,
    pub removed: usize,
    pub unmodified: usize,
}

impl AnalysisResult {
    /// Serials of a plain-identity bucket. Returns `None` for `Modified`.
    pub fn serials(&self, bucket: Bucket) -> Option<&[String]> {
        match bucket {
            Bucket::NewWorking => Some(&self.new_working),
            Bucket::NewViewedValuable => Some(&self.new_viewed_valuable),
            Bucket::NewBroken => Some(&self.new_broken),
            Bucket::NewUnknown => Some(&self.new_unknown),
            Bucket::NewLowValue => Some(&self.new_low_value),
            Bucket::Modified => None,
            Bucket::Removed => Some(&self.removed),
            Bucket::Unmodified => Some(&self.unmodified),
        }
    }

    pub fn len_of(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Modified => self.modified.len(),
            other => self.serials(other).map_or(0, <[String]>::len),
        }
    }

    pub fn counts(&self) -> BucketCounts {
        BucketCounts {
            new_working: self.new_working.len(),
            new_viewed_valuable: self.new_viewed_valuable.len(),
            new_broken: self.new_broken.len(),
            new_unknown: self.new_unknown.len(),
            new_low_value: self.new_low_value.len(),
            modified: self.modified.len(),
            removed: self.removed.len(),
            unmodified: self.unmodified.len(),
        }
    }

    /// Serials present only in the live snapshot
    pub fn new_total(&self) -> usize {
        Bucket::ALL
            .iter()
            .filter(|b| b.is_new())
            .map(|b| self.len_of(*b))
            .sum()
    }

    /// Serials present in both snapshots
    pub fn shared_total(&self) -> usize {
        self.modified.len() + self.unmodified.len()
    }
}
