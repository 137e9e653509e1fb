//! Traits for key-value store and email integration

use async_trait::async_trait;

use crate::domain::entities::OtpEntry;
use crate::domain::value_objects::RequestId;

/// Trait for the TTL key-value store holding pending entries
#[async_trait]
pub trait OtpStoreTrait: Send + Sync {
    /// Persist an entry that expires after `ttl_seconds`
    async fn store(&self, request_id: &RequestId, entry: &OtpEntry, ttl_seconds: u64) -> Result<(), String>;
    /// Fetch an entry, `None` if absent or expired
    async fn fetch(&self, request_id: &RequestId) -> Result<Option<OtpEntry>, String>;
    /// Remove an entry; callers treat failure as non-fatal
    async fn delete(&self, request_id: &RequestId) -> Result<(), String>;
}

/// Trait for transactional email delivery
#[async_trait]
pub trait NotifierTrait: Send + Sync {
    /// Send a plain-text email, returning the provider message id
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String>;
}

#[async_trait]
impl<T: OtpStoreTrait + ?Sized> OtpStoreTrait for Box<T> {
    async fn store(&self, request_id: &RequestId, entry: &OtpEntry, ttl_seconds: u64) -> Result<(), String> {
        (**self).store(request_id, entry, ttl_seconds).await
    }

    async fn fetch(&self, request_id: &RequestId) -> Result<Option<OtpEntry>, String> {
        (**self).fetch(request_id).await
    }

    async fn delete(&self, request_id: &RequestId) -> Result<(), String> {
        (**self).delete(request_id).await
    }
}

#[async_trait]
impl<T: NotifierTrait + ?Sized> NotifierTrait for Box<T> {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        (**self).send(to, subject, body).await
    }
}
