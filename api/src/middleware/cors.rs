//! CORS response header
//!
//! Browsers post the form without a preflight, so the only header needed is
//! `Access-Control-Allow-Origin`, set to the configured origin on every
//! response including errors.

use actix_web::http::header::{self, HeaderValue};
use actix_web::middleware::DefaultHeaders;

use otp_shared::CorsConfig;

const ANY_ORIGIN: &str = "*";

/// Header value for the configured origin, `*` if it is not a valid header
pub fn allowed_origin(config: &CorsConfig) -> HeaderValue {
    HeaderValue::from_str(&config.allowed_origin).unwrap_or_else(|_| {
        log::warn!(
            "CORS_ORIGIN {:?} is not a valid header value, allowing any origin",
            config.allowed_origin
        );
        HeaderValue::from_static(ANY_ORIGIN)
    })
}

/// Build the header middleware for the configured origin
pub fn create_cors(config: &CorsConfig) -> DefaultHeaders {
    let origin = allowed_origin(config);
    log::info!("Configuring CORS for origin {:?}", origin);
    DefaultHeaders::new().add((header::ACCESS_CONTROL_ALLOW_ORIGIN, origin))
}
