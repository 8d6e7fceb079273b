//! Types for responses from the backend to the frontend.

pub use tango_core::{Flashcard, QuizQuestion};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub message: String,
}
