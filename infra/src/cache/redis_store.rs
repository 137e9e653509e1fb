//! Passcode storage over native Redis

use async_trait::async_trait;
use tracing::{debug, error};

use otp_core::{OtpEntry, OtpStoreTrait, RequestId};
use otp_shared::config::StoreConfig;

use super::redis_client::RedisClient;
use crate::InfrastructureError;

/// Redis-backed passcode store
pub struct RedisOtpStore {
    client: Option<RedisClient>,
    config: StoreConfig,
}

impl RedisOtpStore {
    /// Create a store from configuration; a missing or invalid `REDIS_URL`
    /// yields a store whose every call fails
    pub fn new(config: StoreConfig) -> Self {
        let client = match config.redis_url.as_deref() {
            Some(url) => RedisClient::new(url).ok(),
            None => {
                error!("REDIS_URL is not set; passcode storage will fail");
                None
            }
        };
        Self { client, config }
    }

    fn client(&self) -> Result<&RedisClient, InfrastructureError> {
        self.client
            .as_ref()
            .ok_or_else(|| InfrastructureError::Config("Redis is not configured".to_string()))
    }
}

#[async_trait]
impl OtpStoreTrait for RedisOtpStore {
    async fn store(&self, request_id: &RequestId, entry: &OtpEntry, ttl_seconds: u64) -> Result<(), String> {
        let key = self.config.make_key(request_id.as_str());
        let value = entry.to_json().map_err(|e| e.to_string())?;

        self.client()
            .map_err(|e| e.to_string())?
            .set_with_expiry(&key, &value, ttl_seconds)
            .await
            .map_err(|e| e.to_string())?;

        debug!(ttl_seconds = ttl_seconds, "Stored passcode entry in Redis");
        Ok(())
    }

    async fn fetch(&self, request_id: &RequestId) -> Result<Option<OtpEntry>, String> {
        let key = self.config.make_key(request_id.as_str());
        let raw = self
            .client()
            .map_err(|e| e.to_string())?
            .get(&key)
            .await
            .map_err(|e| e.to_string())?;

        match raw {
            Some(raw) => OtpEntry::from_json(&raw)
                .map(Some)
                .map_err(|e| InfrastructureError::Serialization(e).to_string()),
            None => Ok(None),
        }
    }

    async fn delete(&self, request_id: &RequestId) -> Result<(), String> {
        let key = self.config.make_key(request_id.as_str());
        self.client()
            .map_err(|e| e.to_string())?
            .delete(&key)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
