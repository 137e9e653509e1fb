//! Code and request id generation
//!
//! Both values come from `OsRng`.

use rand::{rngs::OsRng, Rng, RngCore};

use otp_shared::validation::REQUEST_ID_BYTES;

use crate::domain::value_objects::{OtpCode, RequestId, CODE_MAX, CODE_MIN};

/// Generate a uniformly random 6-digit code in [100000, 999999]
pub fn generate_code() -> OtpCode {
    OtpCode::from_number(OsRng.gen_range(CODE_MIN..=CODE_MAX))
}

/// Generate a 128-bit request id as 32 lowercase hex characters
pub fn generate_request_id() -> RequestId {
    let mut bytes = [0u8; REQUEST_ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    RequestId::from_trusted(hex::encode(bytes))
}
