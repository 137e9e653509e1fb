//! Integration tests for the REST store
//!
//! These tests require a REST key-value endpoint.
//! Run with: UPSTASH_REDIS_REST_URL=... UPSTASH_REDIS_REST_TOKEN=... \
//!   cargo test -p otp_infra --test rest_store_integration -- --ignored

use otp_core::{OtpEntry, OtpStoreTrait, Purpose, RequestId};
use otp_infra::cache::UpstashRestStore;
use otp_shared::config::StoreConfig;

fn store() -> UpstashRestStore {
    let url = std::env::var("UPSTASH_REDIS_REST_URL").expect("UPSTASH_REDIS_REST_URL");
    let token = std::env::var("UPSTASH_REDIS_REST_TOKEN").expect("UPSTASH_REDIS_REST_TOKEN");
    UpstashRestStore::new(StoreConfig::rest(url, token).with_prefix("test:otp"))
}

#[tokio::test]
#[ignore] // Requires REST endpoint
async fn test_store_fetch_delete() {
    let store = store();
    let request_id = RequestId::parse("0123456789abcdef0123456789abcdef").unwrap();
    let entry = OtpEntry::from_json(r#"{"code":"735201","purpose":"lab2"}"#).unwrap();

    store.store(&request_id, &entry, 60).await.unwrap();

    let fetched = store.fetch(&request_id).await.unwrap().unwrap();
    assert!(fetched.code.matches("735201"));
    assert_eq!(fetched.purpose, Purpose::Lab2);

    store.delete(&request_id).await.unwrap();
    assert!(store.fetch(&request_id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires REST endpoint
async fn test_bad_token_is_an_error() {
    let url = std::env::var("UPSTASH_REDIS_REST_URL").expect("UPSTASH_REDIS_REST_URL");
    let store = UpstashRestStore::new(StoreConfig::rest(url, "invalid-token"));
    let request_id = RequestId::parse("0123456789abcdef0123456789abcdef").unwrap();

    assert!(store.fetch(&request_id).await.is_err());
}
