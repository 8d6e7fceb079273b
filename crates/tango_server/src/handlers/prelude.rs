//! Frequently used imports for handlers.

pub use crate::{
    error::{ServerError, ServerResult},
    TangoState,
};
pub use axum::{extract::State, Json};
pub use tango_api::{request as req, response as res};
pub use tracing::instrument;
