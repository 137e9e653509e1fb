use actix_web::HttpResponse;

use otp_core::{NotifierTrait, OtpStoreTrait, Purpose};
use otp_shared::validation::mask_request_id;

use super::AppState;
use crate::dto::{OtpForm, RequestCodeResponse};
use crate::handlers::error::to_response;

/// `action=request`: issue and email a code for the given purpose
///
/// The purpose is checked before anything is generated or stored.
pub async fn request_code<S, N>(state: &AppState<S, N>, form: &OtpForm) -> HttpResponse
where
    S: OtpStoreTrait,
    N: NotifierTrait,
{
    let purpose = match form.purpose.as_deref().unwrap_or_default().parse::<Purpose>() {
        Ok(purpose) => purpose,
        Err(error) => {
            log::warn!("Rejected passcode request: {}", error);
            return to_response(&error);
        }
    };

    match state.otp_service.request_code(purpose).await {
        Ok(issued) => {
            log::info!(
                "Passcode issued for {} with request id {}",
                issued.purpose,
                mask_request_id(issued.request_id.as_str())
            );
            HttpResponse::Ok().json(RequestCodeResponse {
                request_id: issued.request_id.to_string(),
            })
        }
        Err(error) => {
            log::error!("Passcode request for {} failed: {}", purpose, error);
            to_response(&error)
        }
    }
}
