//! Mock Email Service Implementation
//!
//! Logs messages instead of sending them. Used for development and tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use otp_core::NotifierTrait;

use super::mask_email;

/// Messages retained for inspection; older ones are dropped
pub const OUTBOX_CAPACITY: usize = 32;

/// A message captured by the mock service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEmail {
    pub message_id: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mock email service
///
/// This implementation:
/// - Logs the recipient and subject as structured fields
/// - Prints the full message to the console when `console_output` is set
/// - Keeps the last [`OUTBOX_CAPACITY`] messages so tests can read the code
#[derive(Clone, Default)]
pub struct MockEmailService {
    message_count: Arc<AtomicU64>,
    outbox: Arc<Mutex<VecDeque<CapturedEmail>>>,
    simulate_failure: bool,
    console_output: bool,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock service that prints every message, body included
    pub fn with_console_output() -> Self {
        Self {
            console_output: true,
            ..Self::default()
        }
    }

    pub fn console_output(&self) -> bool {
        self.console_output
    }

    /// Create a mock service whose every send fails
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Messages sent so far, oldest first
    pub fn sent(&self) -> Vec<CapturedEmail> {
        self.outbox
            .lock()
            .map(|o| o.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn last_sent(&self) -> Option<CapturedEmail> {
        self.outbox.lock().ok().and_then(|o| o.back().cloned())
    }
}

/// Console rendering of a mock message
pub(crate) fn render_console(count: u64, email: &CapturedEmail) -> String {
    let rule = "=".repeat(60);
    format!(
        "\n{rule}\nMOCK EMAIL SERVICE - MESSAGE #{count}\n{rule}\nTo: {}\nSubject: {}\nMessage ID: {}\n\n{}\n{rule}\n",
        email.to, email.subject, email.message_id, email.body
    )
}

#[async_trait]
impl NotifierTrait for MockEmailService {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        if self.simulate_failure {
            warn!("Mock email service simulating failure for {}", mask_email(to));
            return Err("Simulated email sending failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        let email = CapturedEmail {
            message_id: message_id.clone(),
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        };

        if self.console_output {
            println!("{}", render_console(count, &email));
        }

        if let Ok(mut outbox) = self.outbox.lock() {
            if outbox.len() == OUTBOX_CAPACITY {
                outbox.pop_front();
            }
            outbox.push_back(email);
        }

        info!(
            target: "email_service",
            provider = "mock",
            to = %mask_email(to),
            subject = subject,
            message_id = %message_id,
            count = count,
            "Email sent (mock)"
        );

        Ok(message_id)
    }
}
