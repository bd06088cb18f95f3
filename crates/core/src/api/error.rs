//! The response/error normalizer.
//!
//! Every failure in the gateway funnels into [`ApiError`] and leaves as one
//! of four stable envelopes. The underlying detail is logged server-side and
//! never shown to the client; the body carries only a fixed message and a
//! machine-readable code.

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use crate::backend::BackendError;
use crate::points::AdjustmentError;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Invalid request payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Failed to read request body: {0}")]
    UnreadableBody(#[from] BytesRejection),

    #[error("pointsDelta must be non-zero")]
    ZeroPointsDelta,

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Adjustment(#[from] AdjustmentError),

    #[error("Adjustment task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::InvalidPayload(_) | ApiError::UnreadableBody(_) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                "Invalid request payload",
            ),
            ApiError::ZeroPointsDelta => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                "pointsDelta must be non-zero",
            ),
            ApiError::Backend(BackendError::NotFound)
            | ApiError::Adjustment(AdjustmentError::Confirm(BackendError::NotFound)) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", "Customer not found")
            }
            ApiError::Backend(BackendError::Duplicate) => (
                StatusCode::CONFLICT,
                "DUPLICATE_CUSTOMER",
                "A customer with this email already exists",
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "An unexpected error occurred",
            ),
        };

        // the detail stays in the logs, the client gets the stable envelope
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            debug!("Request rejected: {}", self);
        }

        let body = json!({
            "message": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
