//! Translation of domain errors into HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared::ErrorResponse;
use thiserror::Error;

use crate::domain::LedgerError;

/// Errors surfaced by the REST layer. Everything here is a client fault
/// and maps to 400 with a `{"error": "..."}` body; the service has no
/// fallible I/O, so there is no 5xx path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Invalid amount!")]
    InvalidAmount,
    #[error("Invalid date!")]
    InvalidDate,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
