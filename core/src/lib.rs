//! # OTP Relay Core
//!
//! Domain layer for issuing and verifying one-time passcodes.
//! This crate contains the domain types, the code/id generator, the capability
//! traits for the key-value store and the email notifier, and the service
//! implementing the request/verify protocol.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
