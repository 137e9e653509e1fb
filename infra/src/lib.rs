//! # Infrastructure Layer
//!
//! Concrete implementations of the capability traits defined in `otp_core`.
//!
//! ## Architecture
//!
//! - **Cache**: key-value stores for pending passcodes (Upstash REST,
//!   native Redis, in-memory)
//! - **Email**: transactional email delivery (Resend, mock)
//!
//! ## Features
//!
//! - `redis-cache`: Enable the native Redis store (default)

/// Cache module - key-value stores holding pending passcodes
pub mod cache;

/// Email module - transactional email providers
pub mod email;

#[cfg(test)]
pub(crate) mod test_utils;

pub use cache::{create_otp_store, DynOtpStore};
pub use email::{create_notifier, DynNotifier};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[cfg(feature = "redis-cache")]
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from an external service
    #[error("Unexpected status {status} from {service}")]
    Status { service: &'static str, status: u16 },

    /// Stored or received payload could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
