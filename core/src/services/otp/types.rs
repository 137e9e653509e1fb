//! Types for passcode service results

use crate::domain::value_objects::{Purpose, RequestId};

/// Result of issuing a passcode
///
/// Carries the request id only; the code itself never leaves the service
/// except through the notifier.
#[derive(Debug, Clone)]
pub struct IssuedOtp {
    /// Handle the caller presents at verification
    pub request_id: RequestId,
    /// Purpose the code was issued for
    pub purpose: Purpose,
    /// Seconds until the entry expires
    pub expires_in: u64,
    /// Message id reported by the email provider
    pub message_id: String,
}

/// Result of a successful verification
#[derive(Debug, Clone)]
pub struct VerifiedOtp {
    /// The consumed request id
    pub request_id: RequestId,
    /// Purpose the code was issued for
    pub purpose: Purpose,
}
