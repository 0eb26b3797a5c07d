//! Audit logging system for send-cli
//!
//! Every persisted send update is recorded in an append-only JSON-lines log
//! with the envelope before and after the write and a field diff.
//!
//! - `AuditEntry`: one log line (timestamp, operation, entity, values).
//! - `AuditLogger`: appends and reads entries.
//! - `generate_diff`: summarizes changed fields, hiding sealed values.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
