//! Pending passcode entry held in the key-value store

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{OtpCode, Purpose};

/// Value stored under a request id until it is verified or expires
///
/// Entries are never mutated after creation. Serialized as
/// `{"code":"123456","purpose":"login"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpEntry {
    /// The 6-digit secret
    pub code: OtpCode,

    /// Why the code was requested
    pub purpose: Purpose,
}

impl OtpEntry {
    pub fn new(code: OtpCode, purpose: Purpose) -> Self {
        Self { code, purpose }
    }

    /// Encode for storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a stored value
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
