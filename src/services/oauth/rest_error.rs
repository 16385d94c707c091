/*
 * Responsibility
 * - Classified result of a failed token lookup (status + message + code)
 * - Either synthesized locally or decoded from the token service's error body
 */
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned by the token service (or synthesized when talking to it fails).
///
/// Wire shape: `{"message": "...", "status": 404, "error": "not_found"}`.
/// `error` is optional on decode so minimal `{status, message}` bodies are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{status} {error}: {message}")]
pub struct RestError {
    pub message: String,
    pub status: u16,
    #[serde(default)]
    pub error: String,
}

impl RestError {
    pub fn new(status: StatusCode, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: status.as_u16(),
            error: error.into(),
        }
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_server_error",
            message,
        )
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", message)
    }

    /// The token service does not know this token.
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND.as_u16()
    }

    /// Status used to abort the request. Anything that is not a 4xx/5xx
    /// (including values outside the HTTP range) collapses to 500.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status)
            .ok()
            .filter(|s| s.is_client_error() || s.is_server_error())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
