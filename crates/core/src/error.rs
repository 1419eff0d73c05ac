// Central Error Type for the Job Store

use std::fmt::Display;
use std::time::Duration;
use thiserror::Error;

/// Application-level error type
///
/// Every store failure is wrapped with the operation it happened in before
/// it reaches the caller. Nothing is retried automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid job ID: {0}")]
    InvalidId(String),

    #[error("Job with ID {0} not found")]
    NotFound(String),

    #[error("Failed to {operation}: {message}")]
    QueryFailed {
        operation: &'static str,
        message: String,
    },

    #[error("Decode error: {0}")]
    DecodeFailed(String),

    #[error("Timed out after {after:?} while trying to {operation}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Wrap a store error with the operation that produced it
    pub fn query_failed(operation: &'static str, err: impl Display) -> Self {
        AppError::QueryFailed {
            operation,
            message: err.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    pub fn is_invalid_id(&self) -> bool {
        matches!(self, AppError::InvalidId(_))
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
