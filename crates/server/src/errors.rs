use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use thiserror::Error;

/// Failure rendered as `{"error": "..."}` with a matching status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized")
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// 500 with a fixed message; the cause belongs in the logs only.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_errors_read_as_plain_messages() {
        let err = StartupError::InvalidConfig("server address: bad port".into());
        assert_eq!(err.to_string(), "invalid configuration: server address: bad port");
        let err = StartupError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn api_errors_keep_their_status() {
        let response = JsonApiError::conflict("stale version").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
