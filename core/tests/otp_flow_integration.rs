//! Integration tests for the request/verify flow against a TTL-enforcing store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

use otp_core::{
    NotifierTrait, OtpEntry, OtpService, OtpServiceConfig, OtpStoreTrait, Purpose, RequestId,
};

#[derive(Default)]
struct TtlStore {
    entries: Mutex<HashMap<String, (OtpEntry, Instant)>>,
}

#[async_trait]
impl OtpStoreTrait for TtlStore {
    async fn store(&self, request_id: &RequestId, entry: &OtpEntry, ttl_seconds: u64) -> Result<(), String> {
        let expires_at = Instant::now() + Duration::from_secs(ttl_seconds);
        self.entries
            .lock()
            .unwrap()
            .insert(request_id.to_string(), (entry.clone(), expires_at));
        Ok(())
    }

    async fn fetch(&self, request_id: &RequestId) -> Result<Option<OtpEntry>, String> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .get(request_id.as_str())
            .filter(|(_, expires_at)| Instant::now() < *expires_at)
            .map(|(entry, _)| entry.clone()))
    }

    async fn delete(&self, request_id: &RequestId) -> Result<(), String> {
        self.entries.lock().unwrap().remove(request_id.as_str());
        Ok(())
    }
}

#[derive(Default)]
struct Inbox {
    bodies: Mutex<Vec<String>>,
}

impl Inbox {
    fn last_code(&self) -> String {
        let bodies = self.bodies.lock().unwrap();
        let body = bodies.last().expect("an email was sent");
        body.trim_start_matches("Your one-time code is: ")
            .chars()
            .take(6)
            .collect()
    }
}

#[async_trait]
impl NotifierTrait for Inbox {
    async fn send(&self, _to: &str, _subject: &str, body: &str) -> Result<String, String> {
        self.bodies.lock().unwrap().push(body.to_string());
        Ok("inbox".to_string())
    }
}

fn build(ttl_seconds: u64) -> (OtpService<TtlStore, Inbox>, Arc<Inbox>) {
    let inbox = Arc::new(Inbox::default());
    let config = OtpServiceConfig {
        ttl_seconds,
        ..OtpServiceConfig::default()
    }
    .with_recipient("owner@vrlcs.example");
    let service = OtpService::new(Arc::new(TtlStore::default()), inbox.clone(), config);
    (service, inbox)
}

#[tokio::test(start_paused = true)]
async fn test_code_valid_before_ttl() {
    let (service, inbox) = build(300);

    let issued = service.request_code(Purpose::Login).await.unwrap();
    tokio::time::advance(Duration::from_secs(299)).await;

    let code = inbox.last_code();
    assert!(service.verify_code(issued.request_id.as_str(), &code).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn test_code_rejected_after_ttl() {
    let (service, inbox) = build(300);

    let issued = service.request_code(Purpose::Lab1).await.unwrap();
    tokio::time::advance(Duration::from_secs(301)).await;

    let code = inbox.last_code();
    let result = service.verify_code(issued.request_id.as_str(), &code).await;
    assert!(matches!(result, Err(otp_core::DomainError::InvalidOrExpired)));
}

#[tokio::test(start_paused = true)]
async fn test_short_ttl_is_reported_in_email() {
    let (service, inbox) = build(30);

    let issued = service.request_code(Purpose::Lab2).await.unwrap();
    assert_eq!(issued.expires_in, 30);

    let body = inbox.bodies.lock().unwrap().last().cloned().unwrap();
    assert!(body.ends_with("It expires in 30 seconds."));
}

#[tokio::test]
async fn test_independent_requests_do_not_interfere() {
    let (service, inbox) = build(300);

    let first = service.request_code(Purpose::Login).await.unwrap();
    let first_code = inbox.last_code();
    let second = service.request_code(Purpose::Login).await.unwrap();
    let second_code = inbox.last_code();
    assert_ne!(first.request_id, second.request_id);

    assert!(service.verify_code(second.request_id.as_str(), &second_code).await.is_ok());
    assert!(service.verify_code(first.request_id.as_str(), &first_code).await.is_ok());
}
