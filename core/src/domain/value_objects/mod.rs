//! Value objects used by passcode entries.

pub mod credentials;
pub mod purpose;

pub use credentials::{OtpCode, RequestId, CODE_MAX, CODE_MIN};
pub use purpose::Purpose;
