//! Unit tests for email service creation

use otp_core::NotifierTrait;
use otp_shared::config::{EmailConfig, EmailProvider};

use crate::email::{create_notifier, mask_email, MockEmailService};

#[tokio::test]
async fn test_create_mock_service() {
    let config = EmailConfig {
        provider: EmailProvider::Mock,
        ..EmailConfig::default()
    };

    let notifier = create_notifier(&config);
    let message_id = notifier.send("owner@vrlcs.example", "Subject", "Body").await.unwrap();
    assert!(message_id.starts_with("mock_"));
}

#[test]
fn test_only_the_configured_mock_prints_messages() {
    assert!(MockEmailService::with_console_output().console_output());
    assert!(!MockEmailService::new().console_output());
}

#[tokio::test]
async fn test_resend_without_key_does_not_fall_back_to_mock() {
    let config = EmailConfig::default();
    assert_eq!(config.provider, EmailProvider::Resend);

    let notifier = create_notifier(&config);
    let result = notifier.send("owner@vrlcs.example", "Subject", "Body").await;
    assert!(result.unwrap_err().contains("RESEND_API_KEY"));
}

#[test]
fn test_mask_email() {
    assert_eq!(mask_email("owner@vrlcs.example"), "o***@vrlcs.example");
    assert_eq!(mask_email("@vrlcs.example"), "***");
    assert_eq!(mask_email("not-an-address"), "***");
}
