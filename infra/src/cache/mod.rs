//! Cache module for pending passcode storage
//!
//! Every backend stores the JSON encoded entry under the request id with a
//! native expiry, so expired entries read back as absent.

pub mod memory_store;
#[cfg(feature = "redis-cache")]
pub mod redis_client;
#[cfg(feature = "redis-cache")]
pub mod redis_store;
pub mod rest_store;

#[cfg(test)]
mod tests;

pub use memory_store::InMemoryOtpStore;
#[cfg(feature = "redis-cache")]
pub use redis_client::RedisClient;
#[cfg(feature = "redis-cache")]
pub use redis_store::RedisOtpStore;
pub use rest_store::UpstashRestStore;

use otp_core::OtpStoreTrait;
use otp_shared::config::{StoreBackend, StoreConfig};

/// Store selected at runtime
pub type DynOtpStore = Box<dyn OtpStoreTrait>;

/// Create the store named by the configuration
///
/// Never fails: a backend with missing or invalid settings is still built and
/// reports the problem on each call, so the service answers 500 instead of
/// refusing to start.
pub fn create_otp_store(config: &StoreConfig) -> DynOtpStore {
    match config.backend {
        StoreBackend::Rest => Box::new(UpstashRestStore::new(config.clone())),
        #[cfg(feature = "redis-cache")]
        StoreBackend::Redis => Box::new(RedisOtpStore::new(config.clone())),
        #[cfg(not(feature = "redis-cache"))]
        StoreBackend::Redis => {
            tracing::error!("Redis store requested but the redis-cache feature is disabled");
            Box::new(UpstashRestStore::new(StoreConfig::default()))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory passcode store; entries do not survive restarts");
            Box::new(InMemoryOtpStore::new())
        }
    }
}
