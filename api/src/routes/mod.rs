//! Route handlers
//!
//! - `otp` - passcode request and verification on `/api/otp`
//! - `health` - liveness probe

pub mod health;
pub mod otp;
