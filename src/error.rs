//! Application error types and HTTP response mapping.
//!
//! All fallible operations return [`AppError`], which converts into a JSON
//! error response with a stable envelope:
//!
//! ```json
//! {
//!   "error": {
//!     "code": "not_found",
//!     "message": "Shortcode not found",
//!     "details": { "shortcode": "abc123" }
//!   }
//! }
//! ```
//!
//! Errors are terminal for the request that raised them; there is no retry
//! layer anywhere in the service.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Service-wide error type.
///
/// Each variant maps to exactly one HTTP status code:
///
/// | Variant           | Status |
/// |-------------------|--------|
/// | `Validation`      | 400    |
/// | `InvalidUrl`      | 400    |
/// | `InvalidValidity` | 400    |
/// | `Conflict`        | 409    |
/// | `NotFound`        | 404    |
/// | `Expired`         | 410    |
/// | `Internal`        | 500    |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed request body (unreadable JSON, wrong field types).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Missing or unparseable original URL.
    #[error("{message}")]
    InvalidUrl { message: String, details: Value },

    /// Non-positive or out-of-range validity period.
    #[error("{message}")]
    InvalidValidity { message: String, details: Value },

    /// Requested shortcode is already taken.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Shortcode was never allocated.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Shortcode exists but its validity period has passed.
    #[error("{message}")]
    Expired { message: String, details: Value },

    /// Unexpected internal failure.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_url(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_validity(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidValidity {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status code this error renders as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::InvalidUrl { .. } | Self::InvalidValidity { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Expired { .. } => StatusCode::GONE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::InvalidUrl { message, details } => ("invalid_url", message, details),
            AppError::InvalidValidity { message, details } => {
                ("invalid_validity", message, details)
            }
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Expired { message, details } => ("expired", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text(), json!({}))
    }
}
