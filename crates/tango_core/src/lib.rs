//! Tango core types and functions.

pub mod flashcard;
pub mod history;
pub mod quiz;

pub use flashcard::{Flashcard, InvalidFlashcard, QuizQuestion, OPTION_COUNT, QUIZ_COUNT};
pub use history::QuizHistoryEntry;
pub use quiz::{OptionMark, QuizSession};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The display language of the UI and of generated study material.
///
/// Toggling the language only affects static UI text and future
/// generation requests, never content that has already been generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ja,
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }

    /// The natural language name used when prompting the generation service.
    pub fn natural_name(self) -> &'static str {
        match self {
            Language::Ja => "Japanese",
            Language::En => "English",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Ja => Language::En,
            Language::En => Language::Ja,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
