//! Server error type and its HTTP mapping.
//!
//! Every failure that reaches a handler ends in a terminal response:
//! storage failures become a 500 with a JSON error body, bad input a 400.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The store could not execute the operation.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// The request was rejected before reaching storage.
    #[error("{0}")]
    BadRequest(String),
}

pub type Result<T> = core::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::Storage(err) => {
                tracing::error!("storage operation failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage operation failed".to_string(),
                )
            }
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": {
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
