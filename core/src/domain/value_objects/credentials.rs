//! Request ids and passcodes
//!
//! A request id is a bearer credential: whoever holds it may attempt to
//! verify the matching code. It carries 128 bits from the OS CSPRNG.

use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use otp_shared::validation::is_valid_request_id;

/// Smallest code ever issued
pub const CODE_MIN: u32 = 100_000;

/// Largest code ever issued
pub const CODE_MAX: u32 = 999_999;

/// Opaque identifier of one passcode issuance, used as the store key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Wrap an id produced by the generator
    pub(crate) fn from_trusted(value: String) -> Self {
        Self(value)
    }

    /// Parse a caller supplied id
    ///
    /// Returns `None` unless the value is 32 lowercase hex characters, the
    /// only shape the generator produces.
    pub fn parse(value: &str) -> Option<Self> {
        is_valid_request_id(value).then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The secret half of a passcode issuance
///
/// `Debug` is redacted so a code cannot end up in logs by accident.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OtpCode(String);

impl OtpCode {
    /// Wrap a code produced by the generator
    pub(crate) fn from_number(value: u32) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare against a caller supplied code in constant time
    pub fn matches(&self, candidate: &str) -> bool {
        if self.0.len() != candidate.len() {
            return false;
        }
        constant_time_eq(self.0.as_bytes(), candidate.as_bytes())
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OtpCode(******)")
    }
}

// Older producers wrote the code as a JSON number.
impl<'de> Deserialize<'de> for OtpCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawCode {
            Text(String),
            Number(u64),
        }

        Ok(match RawCode::deserialize(deserializer)? {
            RawCode::Text(text) => OtpCode(text),
            RawCode::Number(number) => OtpCode(number.to_string()),
        })
    }
}
