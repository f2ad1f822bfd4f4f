//! Error types for the collegemate backend.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Request-level error surface.
///
/// Every failure a handler or the session gate can produce maps onto one of
/// these variants, which in turn map onto a single HTTP status each. All
/// credential failures collapse into `Unauthorized` so a caller cannot tell
/// which check rejected the token.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing, malformed, tampered, or expired session credential.
    #[error("Unauthorized access!!")]
    Unauthorized,

    /// Malformed identifier or payload.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Document store failure, propagated without retry.
    #[error("Store error: {0}")]
    Store(String),

    /// Server-side fault that should never happen in practice.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Store and internal faults are logged with their full cause but
        // answered with a generic message.
        let message = match &self {
            ApiError::Unauthorized | ApiError::BadRequest(_) => self.to_string(),
            ApiError::Store(cause) => {
                tracing::error!("document store failure: {cause}");
                "Document store unavailable".to_string()
            }
            ApiError::Internal(cause) => {
                tracing::error!("internal failure: {cause}");
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::Store(err.to_string())
    }
}
