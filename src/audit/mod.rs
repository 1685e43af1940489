//! Activity log
//!
//! Records expenses added, budget changes, saves and loads to an
//! append-only JSONL file next to the data file.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, Operation, Subject};
pub use logger::AuditLogger;
