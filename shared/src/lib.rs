//! Shared utilities and common types for the OTP relay
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Format validation for request ids and passcodes

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, EmailConfig, EmailProvider, Environment, OtpConfig, ServerConfig,
    StoreBackend, StoreConfig,
};
pub use utils::validation;
