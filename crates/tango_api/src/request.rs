//! Types for requests from the frontend to the backend.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tango_core::Language;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Generate<'a> {
    pub keyword: Cow<'a, str>,
    pub language: Language,
}
