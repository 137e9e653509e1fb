//! Tests for the in-memory store

use std::time::Duration;

use otp_core::{OtpEntry, OtpStoreTrait, Purpose, RequestId};

use crate::cache::InMemoryOtpStore;

fn request_id(n: u8) -> RequestId {
    RequestId::parse(&format!("{:032x}", n)).unwrap()
}

fn entry(code: &str, purpose: &str) -> OtpEntry {
    OtpEntry::from_json(&format!(r#"{{"code":"{}","purpose":"{}"}}"#, code, purpose)).unwrap()
}

#[tokio::test]
async fn test_store_fetch_delete() {
    let store = InMemoryOtpStore::new();
    let id = request_id(1);

    store.store(&id, &entry("482913", "lab1"), 300).await.unwrap();
    let fetched = store.fetch(&id).await.unwrap().unwrap();
    assert!(fetched.code.matches("482913"));
    assert_eq!(fetched.purpose, Purpose::Lab1);
    assert_eq!(store.peek_code(id.as_str()).await.as_deref(), Some("482913"));

    store.delete(&id).await.unwrap();
    assert!(store.fetch(&id).await.unwrap().is_none());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_delete_missing_key_is_ok() {
    let store = InMemoryOtpStore::new();
    assert!(store.delete(&request_id(9)).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_entries_expire_after_ttl() {
    let store = InMemoryOtpStore::new();
    let short = request_id(1);
    let long = request_id(2);

    store.store(&short, &entry("111111", "login"), 10).await.unwrap();
    store.store(&long, &entry("222222", "lab2"), 300).await.unwrap();
    assert_eq!(store.len().await, 2);

    tokio::time::advance(Duration::from_secs(11)).await;

    assert!(store.fetch(&short).await.unwrap().is_none());
    assert!(store.fetch(&long).await.unwrap().is_some());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_overwrite_replaces_entry() {
    let store = InMemoryOtpStore::new();
    let id = request_id(3);

    store.store(&id, &entry("111111", "login"), 300).await.unwrap();
    store.store(&id, &entry("333333", "lab1"), 300).await.unwrap();

    let fetched = store.fetch(&id).await.unwrap().unwrap();
    assert!(fetched.code.matches("333333"));
    assert_eq!(store.len().await, 1);
}
