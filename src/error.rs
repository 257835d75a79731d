// SPDX-License-Identifier: MIT
// Copyright 2026 Activity Tracker Contributors

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
///
/// Unmatched routes are not errors here: they resolve to the `NotFound`
/// page via the router fallback, with its own body shape.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl From<crate::models::PayloadError> for AppError {
    fn from(err: crate::models::PayloadError) -> Self {
        match err {
            crate::models::PayloadError::Malformed(e) => AppError::BadRequest(e.to_string()),
            crate::models::PayloadError::Invalid(e) => AppError::InvalidPayload(e.to_string()),
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::InvalidPayload(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid_payload",
                Some(msg.clone()),
            ),
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
