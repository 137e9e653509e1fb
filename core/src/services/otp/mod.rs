//! Passcode service module
//!
//! This module provides the request/verify workflow:
//! - Code and request id generation from the OS CSPRNG
//! - Storage of pending entries with a TTL
//! - Delivery of the code by email
//! - One-time verification

mod config;
pub mod generator;
mod service;
mod traits;
mod types;


pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use traits::{NotifierTrait, OtpStoreTrait};
pub use types::{IssuedOtp, VerifiedOtp};
