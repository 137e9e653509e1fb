//! Tests for the mock email service

use otp_core::NotifierTrait;

use crate::email::mock_email::{render_console, CapturedEmail, OUTBOX_CAPACITY};
use crate::email::MockEmailService;

#[tokio::test]
async fn test_mock_email_send_success() {
    let service = MockEmailService::new();

    let message_id = service
        .send("owner@vrlcs.example", "VRL OTP for LOGIN", "Your one-time code is: 123456")
        .await
        .unwrap();

    assert!(message_id.starts_with("mock_"));
    assert_eq!(service.get_message_count(), 1);

    let sent = service.last_sent().unwrap();
    assert_eq!(sent.message_id, message_id);
    assert_eq!(sent.to, "owner@vrlcs.example");
    assert_eq!(sent.subject, "VRL OTP for LOGIN");
    assert!(sent.body.contains("123456"));
}

#[tokio::test]
async fn test_mock_email_simulate_failure() {
    let service = MockEmailService::failing();

    let result = service.send("owner@vrlcs.example", "Subject", "Body").await;
    assert!(result.is_err());
    assert_eq!(service.get_message_count(), 0);
    assert!(service.sent().is_empty());
}

#[tokio::test]
async fn test_mock_email_counter_and_unique_ids() {
    let service = MockEmailService::new();
    let clone = service.clone();

    for i in 1..=3 {
        clone.send("owner@vrlcs.example", "Subject", &format!("Message {}", i)).await.unwrap();
        assert_eq!(service.get_message_count(), i);
    }

    let sent = service.sent();
    assert_eq!(sent.len(), 3);
    assert_ne!(sent[0].message_id, sent[1].message_id);
    assert_eq!(sent[2].body, "Message 3");
}

#[tokio::test]
async fn test_mock_email_outbox_is_bounded() {
    let service = MockEmailService::new();

    for i in 0..OUTBOX_CAPACITY + 5 {
        service.send("owner@vrlcs.example", "Subject", &format!("Message {}", i)).await.unwrap();
    }

    let sent = service.sent();
    assert_eq!(sent.len(), OUTBOX_CAPACITY);
    assert_eq!(sent[0].body, "Message 5");
    assert_eq!(
        service.last_sent().unwrap().body,
        format!("Message {}", OUTBOX_CAPACITY + 4)
    );
    assert_eq!(service.get_message_count(), (OUTBOX_CAPACITY + 5) as u64);
}

#[test]
fn test_console_rendering_shows_full_body() {
    let email = CapturedEmail {
        message_id: "mock_1".to_string(),
        to: "owner@vrlcs.example".to_string(),
        subject: "VRL OTP for LAB1".to_string(),
        body: "Your one-time code is: 654321".to_string(),
    };

    let rendered = render_console(7, &email);
    assert!(rendered.contains("MESSAGE #7"));
    assert!(rendered.contains("To: owner@vrlcs.example"));
    assert!(rendered.contains("Subject: VRL OTP for LAB1"));
    assert!(rendered.contains("Your one-time code is: 654321"));
}
