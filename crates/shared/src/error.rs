//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Component-specific errors (validation, closure, sequencer, aggregation)
/// convert into these coarse categories at the application boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// One or more field invariants failed; recoverable by the caller.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input snapshot was malformed and the operation was rejected up front.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Stored data is internally inconsistent; fatal to the current operation.
    #[error("Data corruption: {0}")]
    DataCorruption(String),

    /// A serialized resource could not be acquired; safe to retry.
    #[error("Contention: {0}")]
    Contention(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the error code for surfacing to the surrounding application.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::DataCorruption(_) => "DATA_CORRUPTION",
            Self::Contention(_) => "CONTENTION",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the caller may safely retry the failed operation.
    ///
    /// Only contention qualifies; no component retries on its own behalf.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Contention(_))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
