//! Domain entities representing stored objects.

pub mod otp_entry;

pub use otp_entry::OtpEntry;
