//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by contact record operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A value object rejected its input
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The phone number to edit is not on the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
