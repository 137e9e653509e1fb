//! Configuration module with sub-modules per external concern
//!
//! - `email` - Transactional email provider settings
//! - `environment` - Environment detection
//! - `otp` - Passcode lifetime and message settings
//! - `server` - HTTP server and CORS settings
//! - `store` - Key-value store backend settings

pub mod email;
pub mod environment;
pub mod otp;
pub mod server;
pub mod store;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::validation::validators;

pub use email::{EmailConfig, EmailProvider};
pub use environment::Environment;
pub use otp::OtpConfig;
pub use server::{CorsConfig, ServerConfig};
pub use store::{StoreBackend, StoreConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Key-value store configuration
    pub store: StoreConfig,

    /// Email configuration
    pub email: EmailConfig,

    /// Passcode configuration
    pub otp: OtpConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            cors: CorsConfig::from_env(),
            store: StoreConfig::from_env(),
            email: EmailConfig::from_env(),
            otp: OtpConfig::from_env(),
        }
    }

    /// Settings that will make requests fail at runtime
    ///
    /// Nothing here is fatal; callers log the list at startup.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        match self.email.recipient.as_deref() {
            None => warnings.push("OWNER_EMAIL is not set; every passcode request will fail".to_string()),
            Some(address) if !validators::is_valid_email(address) => {
                warnings.push(format!("OWNER_EMAIL {:?} does not look like an email address", address))
            }
            Some(_) => {}
        }

        if self.email.provider == EmailProvider::Resend && self.email.api_key.is_none() {
            warnings.push("RESEND_API_KEY is not set; emails cannot be delivered".to_string());
        }

        match self.store.backend {
            StoreBackend::Rest => match self.store.rest_url.as_deref() {
                Some(url) if !validators::is_valid_url(url) => {
                    warnings.push(format!("UPSTASH_REDIS_REST_URL {:?} is not an http(s) URL", url))
                }
                None => warnings.push("UPSTASH_REDIS_REST_URL is not set".to_string()),
                Some(_) if self.store.rest_token.is_none() => {
                    warnings.push("UPSTASH_REDIS_REST_TOKEN is not set".to_string())
                }
                Some(_) => {}
            },
            StoreBackend::Redis if self.store.redis_url.is_none() => {
                warnings.push("REDIS_URL is not set".to_string())
            }
            StoreBackend::Redis | StoreBackend::Memory => {}
        }

        warnings
    }
}

/// Read an optional variable, treating empty values as unset
pub(crate) fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read and parse a variable, falling back to `default` when unset or invalid
pub(crate) fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env_parse_where(key, default, |_| true)
}

/// Like [`env_parse`], but a parsed value failing `accept` is also invalid
pub(crate) fn env_parse_where<T: FromStr>(key: &str, default: T, accept: impl Fn(&T) -> bool) -> T {
    match env_opt(key) {
        Some(raw) => match raw.parse::<T>() {
            Ok(value) if accept(&value) => value,
            _ => {
                tracing::warn!(key = key, value = %raw, "Invalid configuration value, using default");
                default
            }
        },
        None => default,
    }
}
