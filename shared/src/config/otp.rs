//! Passcode configuration module

use serde::{Deserialize, Serialize};

use super::{env_opt, env_parse_where};

/// Default lifetime of a pending passcode in seconds
pub const DEFAULT_TTL_SECONDS: u64 = 300;

/// Passcode lifetime and message settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Seconds a pending passcode stays valid
    pub ttl_seconds: u64,

    /// Prefix of the email subject, followed by the upper-cased purpose
    pub subject_prefix: String,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_TTL_SECONDS,
            subject_prefix: String::from("VRL OTP"),
        }
    }
}

impl OtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_seconds: env_parse_where("OTP_TTL", defaults.ttl_seconds, |ttl| *ttl > 0),
            subject_prefix: env_opt("OTP_SUBJECT_PREFIX").unwrap_or(defaults.subject_prefix),
        }
    }
}
