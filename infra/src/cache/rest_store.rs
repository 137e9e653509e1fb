//! Passcode storage over the Upstash Redis REST protocol
//!
//! Commands are issued as path segments with bearer auth:
//! - `GET {url}/set/{key}/{value}?EX={ttl}`
//! - `GET {url}/get/{key}` returning `{"result": <string|null>}`
//! - `GET {url}/del/{key}`

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

use otp_core::{OtpEntry, OtpStoreTrait, RequestId};
use otp_shared::config::StoreConfig;

use crate::InfrastructureError;

const SERVICE: &str = "kv-rest";

/// Body of every REST command response
#[derive(Debug, Deserialize)]
pub(crate) struct CommandResponse {
    pub result: Option<serde_json::Value>,
}

/// REST-backed passcode store
pub struct UpstashRestStore {
    client: Client,
    config: StoreConfig,
}

impl UpstashRestStore {
    /// Create a new REST store
    ///
    /// Missing URL or token is reported per call, not here.
    pub fn new(config: StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build HTTP client with timeout, using defaults: {}", e);
                Client::new()
            });
        Self { client, config }
    }

    /// Base URL and token, or a configuration error
    fn credentials(&self) -> Result<(&str, &str), InfrastructureError> {
        match (self.config.rest_url.as_deref(), self.config.rest_token.as_deref()) {
            (Some(url), Some(token)) => Ok((url, token)),
            _ => Err(InfrastructureError::Config(
                "UPSTASH_REDIS_REST_URL and UPSTASH_REDIS_REST_TOKEN must be set".to_string(),
            )),
        }
    }

    /// Build a command URL; each segment is percent-encoded
    pub(crate) fn command_url(base: &str, segments: &[&str]) -> Result<Url, InfrastructureError> {
        let mut url = Url::parse(base)
            .map_err(|e| InfrastructureError::Config(format!("Invalid REST store URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| InfrastructureError::Config("REST store URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue one command and decode its result
    async fn execute(
        &self,
        segments: &[&str],
        query: Option<(&str, String)>,
    ) -> Result<Option<serde_json::Value>, InfrastructureError> {
        let (base, token) = self.credentials()?;
        let mut url = Self::command_url(base, segments)?;
        if let Some((key, value)) = query {
            url.query_pairs_mut().append_pair(key, &value);
        }

        let response = self.client.get(url).bearer_auth(token).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(InfrastructureError::Status {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

        let body: CommandResponse = response.json().await?;
        Ok(body.result)
    }

    pub(crate) fn decode_entry(
        result: Option<serde_json::Value>,
    ) -> Result<Option<OtpEntry>, InfrastructureError> {
        match result {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(raw)) => Ok(Some(OtpEntry::from_json(&raw)?)),
            Some(other) => Err(InfrastructureError::Config(format!(
                "Unexpected GET result type: {}",
                other
            ))),
        }
    }
}

#[async_trait]
impl OtpStoreTrait for UpstashRestStore {
    async fn store(&self, request_id: &RequestId, entry: &OtpEntry, ttl_seconds: u64) -> Result<(), String> {
        let key = self.config.make_key(request_id.as_str());
        let value = entry.to_json().map_err(|e| e.to_string())?;

        self.execute(&["set", &key, &value], Some(("EX", ttl_seconds.to_string())))
            .await
            .map_err(|e| e.to_string())?;

        debug!(ttl_seconds = ttl_seconds, "Stored passcode entry via REST");
        Ok(())
    }

    async fn fetch(&self, request_id: &RequestId) -> Result<Option<OtpEntry>, String> {
        let key = self.config.make_key(request_id.as_str());
        let result = self
            .execute(&["get", &key], None)
            .await
            .map_err(|e| e.to_string())?;
        Self::decode_entry(result).map_err(|e| e.to_string())
    }

    async fn delete(&self, request_id: &RequestId) -> Result<(), String> {
        let key = self.config.make_key(request_id.as_str());
        self.execute(&["del", &key], None)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
