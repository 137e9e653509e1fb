//! Main passcode service implementation

use std::sync::Arc;

use otp_shared::validation::mask_request_id;

use crate::domain::entities::OtpEntry;
use crate::domain::value_objects::{Purpose, RequestId};
use crate::errors::{DomainError, DomainResult};

use super::config::OtpServiceConfig;
use super::generator::{generate_code, generate_request_id};
use super::traits::{NotifierTrait, OtpStoreTrait};
use super::types::{IssuedOtp, VerifiedOtp};

/// Passcode service for issuing and verifying one-time codes
///
/// Holds no mutable state of its own. Two concurrent verifications of the
/// same id may both read the entry before either deletes it; the store's
/// GET/DEL atomicity is all the coordination there is.
pub struct OtpService<S: OtpStoreTrait, N: NotifierTrait> {
    /// Key-value store for pending entries
    store: Arc<S>,
    /// Email delivery
    notifier: Arc<N>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<S: OtpStoreTrait, N: NotifierTrait> OtpService<S, N> {
    /// Create a new passcode service
    ///
    /// # Arguments
    ///
    /// * `store` - Key-value store implementation
    /// * `notifier` - Email notifier implementation
    /// * `config` - Service configuration
    pub fn new(store: Arc<S>, notifier: Arc<N>, config: OtpServiceConfig) -> Self {
        Self {
            store,
            notifier,
            config,
        }
    }

    /// Issue a passcode for a purpose
    ///
    /// This method:
    /// 1. Generates a code and request id
    /// 2. Stores the entry with the configured TTL
    /// 3. Emails the code to the configured recipient
    ///
    /// A storage failure stops before any email is attempted. An email
    /// failure removes the stored entry so the id is never usable.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedOtp)` - The request id to hand back to the caller
    /// * `Err(DomainError)` - `StoreFailed` or `EmailFailed`
    pub async fn request_code(&self, purpose: Purpose) -> DomainResult<IssuedOtp> {
        let request_id = generate_request_id();
        let entry = OtpEntry::new(generate_code(), purpose);
        let ttl_seconds = self.config.ttl_seconds;

        self.store
            .store(&request_id, &entry, ttl_seconds)
            .await
            .map_err(|e| {
                tracing::error!(
                    purpose = %purpose,
                    error = %e,
                    event = "otp_storage_failed",
                    "Failed to store passcode"
                );
                DomainError::StoreFailed { message: e }
            })?;

        let recipient = match self.config.recipient.as_deref() {
            Some(recipient) => recipient,
            None => {
                tracing::error!(
                    purpose = %purpose,
                    event = "otp_email_failed",
                    "No recipient configured for passcode emails"
                );
                self.discard(&request_id).await;
                return Err(DomainError::EmailFailed {
                    message: "recipient not configured".to_string(),
                });
            }
        };

        let subject = format!("{} for {}", self.config.subject_prefix, purpose.label());
        let body = format!(
            "Your one-time code is: {}\nIt expires in {} seconds.",
            entry.code.as_str(),
            ttl_seconds
        );

        let message_id = match self.notifier.send(recipient, &subject, &body).await {
            Ok(message_id) => message_id,
            Err(e) => {
                tracing::error!(
                    purpose = %purpose,
                    error = %e,
                    event = "otp_email_failed",
                    "Failed to deliver passcode email"
                );
                self.discard(&request_id).await;
                return Err(DomainError::EmailFailed { message: e });
            }
        };

        tracing::info!(
            purpose = %purpose,
            request_id = %mask_request_id(request_id.as_str()),
            message_id = %message_id,
            event = "otp_issued",
            "Issued passcode"
        );

        Ok(IssuedOtp {
            request_id,
            purpose,
            expires_in: ttl_seconds,
            message_id,
        })
    }

    /// Verify a passcode and consume it
    ///
    /// A wrong code leaves the entry in place for a correct retry until it
    /// expires. A matching code deletes the entry before returning.
    ///
    /// # Returns
    ///
    /// * `Ok(VerifiedOtp)` - The code matched and the entry is gone
    /// * `Err(DomainError)` - `MissingField`, `InvalidOrExpired`, `BadCode`,
    ///   or `Internal` when the store cannot be read
    pub async fn verify_code(&self, request_id: &str, code: &str) -> DomainResult<VerifiedOtp> {
        if request_id.is_empty() {
            return Err(DomainError::MissingField {
                field: "request_id".to_string(),
            });
        }
        if code.is_empty() {
            return Err(DomainError::MissingField {
                field: "code".to_string(),
            });
        }

        // Ids the generator cannot produce are never stored.
        let request_id = match RequestId::parse(request_id) {
            Some(id) => id,
            None => {
                tracing::warn!(
                    event = "otp_malformed_request_id",
                    length = request_id.len(),
                    "Rejected malformed request id"
                );
                return Err(DomainError::InvalidOrExpired);
            }
        };

        let entry = self.store.fetch(&request_id).await.map_err(|e| {
            tracing::error!(
                request_id = %mask_request_id(request_id.as_str()),
                error = %e,
                event = "otp_fetch_failed",
                "Failed to read passcode entry"
            );
            DomainError::Internal {
                message: format!("Failed to fetch passcode: {}", e),
            }
        })?;

        let entry = match entry {
            Some(entry) => entry,
            None => {
                tracing::info!(
                    request_id = %mask_request_id(request_id.as_str()),
                    event = "otp_not_found",
                    "Passcode entry missing or expired"
                );
                return Err(DomainError::InvalidOrExpired);
            }
        };

        if !entry.code.matches(code) {
            tracing::warn!(
                request_id = %mask_request_id(request_id.as_str()),
                purpose = %entry.purpose,
                event = "otp_verification_failed",
                "Passcode mismatch"
            );
            return Err(DomainError::BadCode);
        }

        self.discard(&request_id).await;

        tracing::info!(
            request_id = %mask_request_id(request_id.as_str()),
            purpose = %entry.purpose,
            event = "otp_verified_success",
            "Passcode verified"
        );

        Ok(VerifiedOtp {
            request_id,
            purpose: entry.purpose,
        })
    }

    /// Best-effort removal; the entry expires on its own if this fails
    async fn discard(&self, request_id: &RequestId) {
        if let Err(e) = self.store.delete(request_id).await {
            tracing::warn!(
                request_id = %mask_request_id(request_id.as_str()),
                error = %e,
                event = "otp_delete_failed",
                "Failed to delete passcode entry"
            );
        }
    }
}
