//! Tango server error type.

use axum::{
    http::{Response, StatusCode},
    response::IntoResponse,
};
use tango_api::response as res;

pub type ServerResult<T> = Result<T, ServerError>;

/// An error response with a user-facing message.
///
/// The full error chain is logged server-side; only the stored message
/// crosses the wire, so failures from the generation service all look
/// the same to the client.
pub struct ServerError {
    status: StatusCode,
    message: String,
    report: Option<eyre::Report>,
}

impl ServerError {
    pub fn bad_request(message: impl ToString) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
            report: None,
        }
    }

    /// The single generation failure bucket: network failure, empty
    /// response, malformed payload and schema violation all land here.
    pub fn generation_failure(report: eyre::Report) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: "Failed to generate study material".to_string(),
            report: Some(report),
        }
    }
}

impl<E> From<E> for ServerError
where
    E: Into<eyre::Report>,
{
    fn from(value: E) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
            report: Some(value.into()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        if let Some(report) = &self.report {
            tracing::error!("Request failed: {report:#}");
        }
        let err = res::Error {
            message: self.message,
        };
        let body = serde_json::to_string(&err).expect("failed to serialize response");
        Response::builder()
            .status(self.status)
            .header("Content-Type", "application/json")
            .body(body)
            .expect("failed to construct response")
            .into_response()
    }
}

pub type EyreResult<T> = Result<T, eyre::Report>;
