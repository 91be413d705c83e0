//! Report persistence
//!
//! Reports are written with a temp→rename pattern so a reader never sees a
//! partially written file.

pub mod atomic;
pub mod writer;

pub use atomic::atomic_write;
pub use writer::write_report;
