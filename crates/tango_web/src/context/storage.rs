//! Local storage port for the user name and the quiz history log.
//!
//! Everything here degrades gracefully: a missing key, denied storage
//! access or an unparseable value reads back as "nothing stored". The
//! history log is a single JSON array that is read, appended to and
//! rewritten in full on every save.

use crate::error::{WebError, WebResult};
use tango_core::{history, QuizHistoryEntry};

/// Fixed key for the quiz history log.
pub const HISTORY_KEY: &str = "tango_quiz_history";
/// Fixed key for the registered user name.
pub const USER_NAME_KEY: &str = "tango_user_name";

pub struct Storage;

impl Storage {
    fn local_storage() -> Option<web_sys::Storage> {
        if cfg!(feature = "ssr") {
            // no browser storage within the server
            return None;
        }
        match leptos::prelude::window().local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                tracing::warn!("Local storage unavailable: {err:?}");
                None
            }
        }
    }

    pub fn user_name() -> Option<String> {
        Self::local_storage()?
            .get_item(USER_NAME_KEY)
            .ok()
            .flatten()
            .filter(|name| !name.trim().is_empty())
    }

    pub fn set_user_name(name: &str) -> WebResult<()> {
        let storage = Self::local_storage()
            .ok_or_else(|| WebError::new("Local storage is not available"))?;
        storage
            .set_item(USER_NAME_KEY, name)
            .map_err(WebError::from_js)
    }

    /// Reads the full history log, oldest entry first.
    pub fn load_history() -> Vec<QuizHistoryEntry> {
        let Some(storage) = Self::local_storage() else {
            return Vec::new();
        };
        let Ok(Some(stored)) = storage.get_item(HISTORY_KEY) else {
            return Vec::new();
        };
        match history::decode(&stored) {
            Ok(entries) => entries,
            Err(err) => {
                // a broken log must never block the application
                tracing::warn!("Discarding unreadable quiz history: {err}");
                Vec::new()
            }
        }
    }

    /// Appends one entry to the history log.
    pub fn append_history(entry: QuizHistoryEntry) -> WebResult<()> {
        let storage = Self::local_storage()
            .ok_or_else(|| WebError::new("Local storage is not available"))?;
        let mut entries = Self::load_history();
        entries.push(entry);
        let encoded = history::encode(&entries).map_err(WebError::from)?;
        storage
            .set_item(HISTORY_KEY, &encoded)
            .map_err(WebError::from_js)
    }
}
