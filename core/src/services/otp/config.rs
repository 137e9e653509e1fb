//! Configuration for the passcode service

use otp_shared::config::{otp::DEFAULT_TTL_SECONDS, AppConfig};

/// Configuration for the passcode service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Seconds a pending entry stays valid
    pub ttl_seconds: u64,
    /// Address every code is sent to
    pub recipient: Option<String>,
    /// Email subject prefix
    pub subject_prefix: String,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_TTL_SECONDS,
            recipient: None,
            subject_prefix: String::from("VRL OTP"),
        }
    }
}

impl OtpServiceConfig {
    /// Build from the application configuration
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            ttl_seconds: config.otp.ttl_seconds,
            recipient: config.email.recipient.clone(),
            subject_prefix: config.otp.subject_prefix.clone(),
        }
    }

    /// Set the recipient address
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }
}
