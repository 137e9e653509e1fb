//! Passcode route handlers
//!
//! A single endpoint serves both actions, selected by the `action` form
//! field:
//! - `request` issues a code for a purpose and emails it
//! - `verify` consumes a request id and code

pub mod request_code;
pub mod verify_code;

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use otp_core::{NotifierTrait, OtpService, OtpStoreTrait};

use crate::dto::{OtpAction, OtpForm};
use crate::handlers::error::bad_action;

/// Application state that holds shared services
pub struct AppState<S, N>
where
    S: OtpStoreTrait,
    N: NotifierTrait,
{
    pub otp_service: Arc<OtpService<S, N>>,
}

impl<S, N> AppState<S, N>
where
    S: OtpStoreTrait,
    N: NotifierTrait,
{
    pub fn new(otp_service: OtpService<S, N>) -> Self {
        Self {
            otp_service: Arc::new(otp_service),
        }
    }
}

/// Handler for POST /api/otp
///
/// # Request Body (form-encoded, any `Content-Type`)
///
/// ```text
/// action=request&purpose=login
/// action=verify&request_id=<32 hex chars>&code=<6 digits>
/// ```
///
/// # Response
///
/// - `200 {"request_id": "..."}` for a request
/// - `200 {"ok": true}` for a verification
/// - `400|401|500 {"error": "..."}` otherwise
pub async fn otp_handler<S, N>(
    state: web::Data<AppState<S, N>>,
    body: web::Bytes,
) -> HttpResponse
where
    S: OtpStoreTrait + 'static,
    N: NotifierTrait + 'static,
{
    let form = match OtpForm::from_body(&body) {
        Ok(form) => form,
        Err(e) => {
            log::warn!("Rejected undecodable form body: {}", e);
            return bad_action();
        }
    };

    match form.action() {
        Some(OtpAction::Request) => request_code::request_code(&state, &form).await,
        Some(OtpAction::Verify) => verify_code::verify_code(&state, &form).await,
        None => {
            log::warn!("Rejected passcode call with action {:?}", form.action);
            bad_action()
        }
    }
}
