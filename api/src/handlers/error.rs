//! Mapping of domain errors to HTTP responses
//!
//! Each error kind has one status and one public message. Internal detail
//! is logged by the service and never reaches the response body.

use actix_web::{http::StatusCode, HttpResponse};

use otp_core::DomainError;

use crate::dto::ErrorResponse;

pub const BAD_ACTION: &str = "bad action";
pub const METHOD_NOT_ALLOWED: &str = "method not allowed";
pub const NOT_FOUND: &str = "not found";

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::InvalidPurpose { .. } | DomainError::MissingField { .. } => {
            StatusCode::BAD_REQUEST
        }
        DomainError::InvalidOrExpired | DomainError::BadCode => StatusCode::UNAUTHORIZED,
        DomainError::StoreFailed { .. }
        | DomainError::EmailFailed { .. }
        | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Public message for a domain error
pub fn public_message(error: &DomainError) -> &'static str {
    match error {
        DomainError::InvalidPurpose { .. } => "invalid purpose",
        DomainError::MissingField { .. } => "missing fields",
        DomainError::InvalidOrExpired => "invalid/expired",
        DomainError::BadCode => "bad code",
        DomainError::StoreFailed { .. } => "store failed",
        DomainError::EmailFailed { .. } => "email failed",
        DomainError::Internal { .. } => "server error",
    }
}

/// Render a domain error as `{error}` with its status
pub fn to_response(error: &DomainError) -> HttpResponse {
    ErrorResponse::new(public_message(error)).to_response(status_for(error))
}

/// 400 for a missing or unknown action
pub fn bad_action() -> HttpResponse {
    ErrorResponse::new(BAD_ACTION).to_response(StatusCode::BAD_REQUEST)
}

/// 405 for any method other than POST
pub async fn method_not_allowed() -> HttpResponse {
    ErrorResponse::new(METHOD_NOT_ALLOWED).to_response(StatusCode::METHOD_NOT_ALLOWED)
}

/// 404 for unknown paths
pub async fn not_found() -> HttpResponse {
    ErrorResponse::new(NOT_FOUND).to_response(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::InvalidPurpose { value: "admin".into() }, 400, "invalid purpose"),
            (DomainError::MissingField { field: "code".into() }, 400, "missing fields"),
            (DomainError::InvalidOrExpired, 401, "invalid/expired"),
            (DomainError::BadCode, 401, "bad code"),
            (DomainError::StoreFailed { message: "timeout".into() }, 500, "store failed"),
            (DomainError::EmailFailed { message: "422".into() }, 500, "email failed"),
            (DomainError::Internal { message: "boom".into() }, 500, "server error"),
        ];

        for (error, status, message) in cases {
            assert_eq!(status_for(&error).as_u16(), status);
            assert_eq!(public_message(&error), message);
        }
    }
}
