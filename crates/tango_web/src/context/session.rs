//! Session context for the registered user name.
//!
//! Registration is a one-time local step that gates the study flow and
//! enables the history log; there are no accounts and nothing is sent
//! to the server.

use super::storage::Storage;
use crate::error::{WebError, WebResult};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct Session {
    user_name: RwSignal<Option<String>>,
}

impl Session {
    /// A new session starts unregistered so that the first client render
    /// matches the server-rendered markup; any stored name is picked up
    /// afterwards with [`Session::restore`].
    pub fn new() -> Self {
        Self {
            user_name: RwSignal::new(None),
        }
    }

    /// A session with no registered user, used during server rendering.
    pub fn empty() -> Self {
        Self {
            user_name: RwSignal::new(None),
        }
    }

    /// Loads a previously stored user name, if any.
    pub fn restore(&self) {
        if let Some(stored) = Storage::user_name() {
            self.user_name.set(Some(stored));
        }
    }

    pub fn user_name(&self) -> Option<String> {
        self.user_name.get()
    }

    pub fn registered(&self) -> bool {
        self.user_name.with(Option::is_some)
    }

    /// Stores the user name and unlocks the study flow.
    pub fn identify(&self, name: &str) -> WebResult<()> {
        let Some(name) = normalized_name(name) else {
            return Err(WebError::new("The name must not be empty"));
        };
        Storage::set_user_name(name)?;
        self.user_name.set(Some(name.to_string()));
        Ok(())
    }
}

fn normalized_name(name: &str) -> Option<&str> {
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_session_is_unregistered() {
        let owner = Owner::new();
        owner.set();

        let session = Session::new();
        assert!(!session.registered());
        assert_eq!(session.user_name(), None);
    }

    #[test]
    fn normalizes_names() {
        assert_eq!(normalized_name("  Hana  "), Some("Hana"));
        assert_eq!(normalized_name(""), None);
        assert_eq!(normalized_name("  \u{3000} "), None);
    }

    #[test]
    fn rejects_blank_names() {
        let owner = Owner::new();
        owner.set();

        let session = Session::new();
        assert!(session.identify("  \u{3000} ").is_err());
        assert!(!session.registered());
    }
}
