//! Key-value store configuration module

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{env_opt, env_parse};

/// Which backend holds pending passcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Redis over the Upstash REST protocol
    #[default]
    Rest,
    /// Redis over its native protocol
    Redis,
    /// Process-local map, for development only
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rest" | "upstash" => Ok(StoreBackend::Rest),
            "redis" => Ok(StoreBackend::Redis),
            "memory" | "mock" => Ok(StoreBackend::Memory),
            _ => Err(format!("Invalid store backend: {}", s)),
        }
    }
}

/// Key-value store configuration
///
/// Credentials are optional on purpose: a store without them reports
/// failure per request instead of preventing startup.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Selected backend
    pub backend: StoreBackend,

    /// Base URL of the REST endpoint
    #[serde(default)]
    pub rest_url: Option<String>,

    /// Bearer token for the REST endpoint
    #[serde(default, skip_serializing)]
    pub rest_token: Option<String>,

    /// Connection URL for native Redis
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Prefix prepended to every key
    #[serde(default)]
    pub key_prefix: Option<String>,

    /// Timeout for outbound requests in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl StoreConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            backend: env_parse("OTP_STORE", StoreBackend::default()),
            rest_url: env_opt("UPSTASH_REDIS_REST_URL").map(|u| u.trim_end_matches('/').to_string()),
            rest_token: env_opt("UPSTASH_REDIS_REST_TOKEN"),
            redis_url: env_opt("REDIS_URL"),
            key_prefix: env_opt("OTP_KEY_PREFIX"),
            timeout_secs: env_parse("HTTP_TIMEOUT_SECS", default_timeout_secs()),
        }
    }

    /// Configuration for the REST backend
    pub fn rest(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            backend: StoreBackend::Rest,
            rest_url: Some(url.into()),
            rest_token: Some(token.into()),
            timeout_secs: default_timeout_secs(),
            ..Default::default()
        }
    }

    /// Set the key prefix for all store keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Generate a store key with prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}
