//! HTTP surface for the OTP relay
//!
//! Exposes the application factory and handlers so integration tests can
//! build the same service the binary runs.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::otp::AppState;
