//! History command
//!
//! Shows the most recent audit log entries.

use crate::error::SendResult;
use crate::storage::Storage;

/// The last `limit` audit entries, oldest first, one line block each
pub fn history_lines(storage: &Storage, limit: usize) -> SendResult<serde_json::Value> {
    let lines: Vec<String> = storage
        .audit()
        .read_recent(limit)?
        .iter()
        .map(|entry| entry.format_human_readable())
        .collect();

    Ok(serde_json::Value::from(lines))
}
