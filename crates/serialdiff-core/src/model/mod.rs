//! Extracted snapshot model
//!
//! - [`StateFlags`]: opaque per-item status with missing-vs-present semantics
//! - [`SerialRecord`] / [`SnapshotMap`]: ordered identity → status mapping
//! - [`UnknownSet`]: identities the live snapshot flags as ambiguous

pub mod snapshot;
pub mod state_flags;

pub use snapshot::{SerialRecord, SnapshotMap, UnknownSet};
pub use state_flags::StateFlags;
