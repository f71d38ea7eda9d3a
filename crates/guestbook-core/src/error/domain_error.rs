//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Infrastructure failure surfaced through the repository boundary.
    /// No retry or recovery is attempted; the request fails.
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get a stable error code for logging and responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }
}
