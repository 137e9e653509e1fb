//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{env_opt, env_parse};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_opt("SERVER_HOST").unwrap_or(defaults.host),
            port: env_parse("SERVER_PORT", defaults.port),
            workers: env_parse("SERVER_WORKERS", defaults.workers),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
///
/// The configured origin is reflected verbatim in `Access-Control-Allow-Origin`
/// on every response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origin, `*` for any
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: String::from("*"),
        }
    }
}

impl CorsConfig {
    /// Create a configuration allowing a single origin
    pub fn new(allowed_origin: impl Into<String>) -> Self {
        Self {
            allowed_origin: allowed_origin.into(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        env_opt("CORS_ORIGIN").map(Self::new).unwrap_or_default()
    }
}
