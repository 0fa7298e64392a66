// src/api/error.rs
// Centralized error handling for HTTP API responses. Art-generation errors
// additionally carry machine-checkable fallback flags so clients can revert
// to the emoji without parsing messages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Standard API error response format
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
    pub fallback_to_emoji: bool,
    pub is_rate_limit_error: bool,
}

impl ApiError {
    fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
            fallback_to_emoji: false,
            is_rate_limit_error: false,
        }
    }

    /// Malformed or missing request fields
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, message)
    }

    /// A window cap was hit. Always machine-checkable via the flag.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        let mut error = Self::new(StatusCode::TOO_MANY_REQUESTS, message);
        error.is_rate_limit_error = true;
        error
    }

    /// The external generation service failed or is misconfigured.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Mark that the client should revert this cycle's art to the emoji.
    pub fn with_emoji_fallback(mut self) -> Self {
        self.fallback_to_emoji = true;
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "error": true,
            "message": self.message,
            "status": self.status_code.as_u16(),
        });

        if self.fallback_to_emoji {
            body["fallbackToEmoji"] = json!(true);
        }
        if self.is_rate_limit_error {
            body["isRateLimitError"] = json!(true);
        }

        (self.status_code, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
