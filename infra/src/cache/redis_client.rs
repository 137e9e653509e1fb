//! Redis cache client implementation
//!
//! Thin async wrapper over a connection manager exposing the three
//! operations the passcode store needs: set with expiry, get and delete.
//! The connection is opened on first use, so a Redis outage at startup
//! surfaces as per-request errors rather than a crash. Once open, the
//! manager re-dials after the socket drops; the command that observed the
//! drop still fails.

use redis::{aio::ConnectionManager, AsyncCommands, Client};
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

use crate::InfrastructureError;

/// Single dial attempt per (re)connect
const CONNECT_RETRIES: usize = 0;

/// Redis client with a lazily established, self-healing connection
pub struct RedisClient {
    client: Client,
    connection: OnceCell<ConnectionManager>,
    masked_url: String,
}

impl RedisClient {
    /// Create a client without connecting
    ///
    /// # Arguments
    /// * `url` - Redis connection URL, e.g. `redis://localhost:6379`
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Client or a configuration error
    pub fn new(url: &str) -> Result<Self, InfrastructureError> {
        let masked_url = mask_url(url);
        let client = Client::open(url).map_err(|e| {
            error!("Failed to parse Redis URL {}: {}", masked_url, e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        info!("Redis client configured for {}", masked_url);
        Ok(Self {
            client,
            connection: OnceCell::new(),
            masked_url,
        })
    }

    async fn connection(&self) -> Result<ConnectionManager, InfrastructureError> {
        let conn = self
            .connection
            .get_or_try_init(|| async {
                debug!("Connecting to Redis at {}", self.masked_url);
                ConnectionManager::new_with_backoff(self.client.clone(), 2, 100, CONNECT_RETRIES)
                    .await
                    .map_err(|e| {
                        warn!("Failed to connect to Redis at {}: {}", self.masked_url, e);
                        InfrastructureError::Cache(e)
                    })
            })
            .await?;
        Ok(conn.clone())
    }

    /// Whether a connection has been established
    pub(crate) fn is_connected(&self) -> bool {
        self.connection.initialized()
    }

    /// Set a value with expiration time
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(key, value, expiry_seconds)
            .await
            .map_err(|e| {
                error!("Failed to set key with expiry {}s: {}", expiry_seconds, e);
                InfrastructureError::Cache(e)
            })
    }

    /// Get a value, `None` if the key is absent or expired
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        let mut conn = self.connection().await?;
        conn.get::<_, Option<String>>(key).await.map_err(|e| {
            error!("Failed to get key: {}", e);
            InfrastructureError::Cache(e)
        })
    }

    /// Delete a key
    ///
    /// # Returns
    /// * `Result<bool, InfrastructureError>` - True if a key was removed
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection().await?;
        let deleted: u32 = conn.del(key).await.map_err(|e| {
            error!("Failed to delete key: {}", e);
            InfrastructureError::Cache(e)
        })?;
        Ok(deleted > 0)
    }

    /// Check connectivity with PING
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection().await?;
        let response: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(response == "PONG")
    }
}

/// Hide credentials embedded in a connection URL
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.rfind('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}
