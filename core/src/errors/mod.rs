//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
///
/// Messages here are for logs. The presentation layer maps each variant to a
/// status code and a fixed public message.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid purpose: {value}")]
    InvalidPurpose { value: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Request id unknown or expired")]
    InvalidOrExpired,

    #[error("Verification code mismatch")]
    BadCode,

    #[error("Failed to store passcode: {message}")]
    StoreFailed { message: String },

    #[error("Failed to deliver passcode: {message}")]
    EmailFailed { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
