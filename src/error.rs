//! The two-kind error taxonomy of the API, mapped to HTTP responses.
//!
//! Handlers return `Result<T, ApiError>`; axum turns the error into a JSON
//! response with a `detail` message, matching the wire contract of the
//! service.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-side problem: empty URL, unrecognized URL shape, no video ID.
    #[error("{0}")]
    BadRequest(String),

    /// Anything that went wrong talking to an upstream collaborator,
    /// carrying the original error text.
    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Upstream failure: {self}");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
