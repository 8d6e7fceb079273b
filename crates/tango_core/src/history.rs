//! The persisted quiz history log.
//!
//! The log is stored as a single JSON array under one key in the
//! browser's local storage. Entries are appended in chronological order
//! and never mutated afterwards; the history view reverses the order
//! for display.

use serde::{Deserialize, Serialize};

/// One completed quiz attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizHistoryEntry {
    pub id: String,
    pub user_name: String,
    pub keyword: String,
    /// Final tally out of ten.
    pub score: u32,
    /// Localized human-readable timestamp, captured at save time.
    pub date: String,
}

/// Encodes a history log for storage.
pub fn encode(entries: &[QuizHistoryEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string(entries)
}

/// Decodes a stored history log.
///
/// Callers treat a decode failure the same as a missing value: an empty
/// history. A broken log never blocks the rest of the application.
pub fn decode(stored: &str) -> Result<Vec<QuizHistoryEntry>, serde_json::Error> {
    serde_json::from_str(stored)
}
