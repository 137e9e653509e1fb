//! Tests for the email providers

mod create_service_tests;
mod mock_email_tests;
