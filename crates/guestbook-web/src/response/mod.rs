//! Response types and error handling for page endpoints
//!
//! Database and rendering failures end up here and surface as plain 500
//! responses; form input never reaches the error path.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use guestbook_common::AppError;
use guestbook_core::DomainError;
use thiserror::Error;
use tracing::error;

/// Error type for request handling
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Template rendering failed: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Domain(_) | Self::Template(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get error code for logging
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Template(_) => "TEMPLATE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!(error = ?self, code = self.error_code(), "Server error occurred");
        }

        // A server-rendered page has no JSON consumer; a terse text body
        // matches the framework's default error responses.
        (status, "Internal Server Error").into_response()
    }
}

/// Type alias for handler results
pub type ApiResult<T> = Result<T, ApiError>;
