/*
 * Responsibility
 * - App-wide ApiError (AppError)
 * - IntoResponse (HTTP status / JSON error body)
 * - Token service errors keep their own status and message
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::oauth::RestError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED".to_string(),
                "unauthorized".to_string(),
            ),
            AppError::Rest(err) => {
                let status = err.status_code();
                let code = if err.error.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("error")
                        .to_ascii_uppercase()
                        .replace(' ', "_")
                } else {
                    err.error.to_ascii_uppercase()
                };
                (status, code, err.message)
            }
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}
