//! Email configuration module

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{env_opt, env_parse};

const DEFAULT_API_URL: &str = "https://api.resend.com";
const DEFAULT_FROM: &str = "no-reply@vrlcs.example";

/// Which provider delivers passcode emails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Resend HTTP API
    #[default]
    Resend,
    /// Log the message instead of sending it
    Mock,
}

impl FromStr for EmailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "resend" => Ok(EmailProvider::Resend),
            "mock" | "console" => Ok(EmailProvider::Mock),
            _ => Err(format!("Invalid email provider: {}", s)),
        }
    }
}

/// Transactional email configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Selected provider
    pub provider: EmailProvider,

    /// API key for the provider
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// Base URL of the provider API
    pub api_url: String,

    /// Sender address
    pub from: String,

    /// Recipient of every passcode
    #[serde(default)]
    pub recipient: Option<String>,

    /// Timeout for outbound requests in seconds
    pub timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::default(),
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            from: DEFAULT_FROM.to_string(),
            recipient: None,
            timeout_secs: 10,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_parse("EMAIL_PROVIDER", defaults.provider),
            api_key: env_opt("RESEND_API_KEY"),
            api_url: env_opt("RESEND_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            from: env_opt("MAIL_FROM").unwrap_or(defaults.from),
            recipient: env_opt("OWNER_EMAIL"),
            timeout_secs: env_parse("HTTP_TIMEOUT_SECS", defaults.timeout_secs),
        }
    }
}
