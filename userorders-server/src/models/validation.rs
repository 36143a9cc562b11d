//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent (or explicitly null) in the request body
    Missing { field: &'static str },

    /// Body could not be parsed as the expected JSON shape
    InvalidBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::InvalidBody { reason } => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Unwrap an optional payload field, naming it when absent.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}
