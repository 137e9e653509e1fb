//! Format validation for values that cross the HTTP boundary

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of random bytes behind a request id
pub const REQUEST_ID_BYTES: usize = 16;

static REQUEST_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-f]{32}$").expect("request id pattern is valid"));

static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("code pattern is valid"));

/// Check that a request id is 32 lowercase hex characters, the only shape
/// ever issued
pub fn is_valid_request_id(value: &str) -> bool {
    REQUEST_ID_PATTERN.is_match(value)
}

/// Check that a code is a 6-digit number in [100000, 999999]
pub fn is_valid_code(value: &str) -> bool {
    CODE_PATTERN.is_match(value)
}

/// Mask a request id for logging, keeping only a short prefix
pub fn mask_request_id(value: &str) -> String {
    let visible: String = value.chars().take(6).collect();
    format!("{}…", visible)
}

/// Common validation functions
pub mod validators {
    /// Check if an email address is valid (basic check)
    pub fn is_valid_email(email: &str) -> bool {
        email.contains('@') && email.contains('.') && email.len() >= 5
    }

    /// Check if a URL is valid (basic check)
    pub fn is_valid_url(url: &str) -> bool {
        url.starts_with("http://") || url.starts_with("https://")
    }
}
