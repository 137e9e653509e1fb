//! In-process passcode store with TTL enforcement
//!
//! Intended for local development and tests. Expired entries are dropped
//! lazily on access.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use otp_core::{OtpEntry, OtpStoreTrait, RequestId};

#[derive(Debug, Clone)]
struct StoredEntry {
    entry: OtpEntry,
    expires_at: Instant,
}

/// Memory-backed passcode store
#[derive(Debug, Default)]
pub struct InMemoryOtpStore {
    entries: RwLock<HashMap<String, StoredEntry>>,
}

impl InMemoryOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (unexpired) entries
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|stored| stored.expires_at > now)
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Read back the code stored under a request id
    pub async fn peek_code(&self, request_id: &str) -> Option<String> {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .get(request_id)
            .filter(|stored| stored.expires_at > now)
            .map(|stored| stored.entry.code.as_str().to_string())
    }
}

#[async_trait]
impl OtpStoreTrait for InMemoryOtpStore {
    async fn store(&self, request_id: &RequestId, entry: &OtpEntry, ttl_seconds: u64) -> Result<(), String> {
        let stored = StoredEntry {
            entry: entry.clone(),
            expires_at: Instant::now() + Duration::from_secs(ttl_seconds),
        };
        let mut entries = self.entries.write().await;
        let now = Instant::now();
        entries.retain(|_, stored| stored.expires_at > now);
        entries.insert(request_id.as_str().to_string(), stored);
        Ok(())
    }

    async fn fetch(&self, request_id: &RequestId) -> Result<Option<OtpEntry>, String> {
        let mut entries = self.entries.write().await;
        match entries.get(request_id.as_str()) {
            Some(stored) if stored.expires_at > Instant::now() => Ok(Some(stored.entry.clone())),
            Some(_) => {
                entries.remove(request_id.as_str());
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, request_id: &RequestId) -> Result<(), String> {
        self.entries.write().await.remove(request_id.as_str());
        Ok(())
    }
}
