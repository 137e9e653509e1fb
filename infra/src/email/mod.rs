//! Email Service Module
//!
//! Transactional email delivery for passcodes.
//!
//! ## Providers
//!
//! - **Resend**: production delivery over the Resend HTTP API
//! - **Mock**: logs the message instead of sending it

pub mod mock_email;
pub mod resend;

#[cfg(test)]
mod tests;

pub use mock_email::MockEmailService;
pub use resend::ResendEmailService;

use otp_core::NotifierTrait;
use otp_shared::config::{EmailConfig, EmailProvider};

/// Notifier selected at runtime
pub type DynNotifier = Box<dyn NotifierTrait>;

/// Create the email service named by the configuration
///
/// A Resend service without an API key is still returned and fails each
/// send; it never degrades to the mock provider.
pub fn create_notifier(config: &EmailConfig) -> DynNotifier {
    match config.provider {
        EmailProvider::Resend => {
            if config.api_key.is_none() {
                tracing::error!("RESEND_API_KEY is not set; passcode emails will fail");
            }
            Box::new(ResendEmailService::new(config.clone()))
        }
        EmailProvider::Mock => {
            tracing::warn!("Using mock email provider; passcodes are printed, not delivered");
            Box::new(MockEmailService::with_console_output())
        }
    }
}

/// Mask an email address for logging, keeping the first character of the
/// local part and the domain
pub fn mask_email(address: &str) -> String {
    match address.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}
