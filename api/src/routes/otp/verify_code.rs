use actix_web::HttpResponse;
use validator::Validate;

use otp_core::{DomainError, NotifierTrait, OtpStoreTrait};
use otp_shared::validation::mask_request_id;

use super::AppState;
use crate::dto::{OtpForm, VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::error::to_response;

/// `action=verify`: consume a request id if the code matches
pub async fn verify_code<S, N>(state: &AppState<S, N>, form: &OtpForm) -> HttpResponse
where
    S: OtpStoreTrait,
    N: NotifierTrait,
{
    let request = VerifyCodeRequest::from(form);

    if let Err(validation_errors) = request.validate() {
        let field = validation_errors
            .field_errors()
            .keys()
            .next()
            .map(|field| field.to_string())
            .unwrap_or_default();
        log::warn!("Rejected verification with missing field {}", field);
        return to_response(&DomainError::MissingField { field });
    }

    let masked = mask_request_id(&request.request_id);

    match state
        .otp_service
        .verify_code(&request.request_id, &request.code)
        .await
    {
        Ok(_) => {
            log::info!("Passcode verified for request id {}", masked);
            HttpResponse::Ok().json(VerifyCodeResponse { ok: true })
        }
        Err(error) => {
            log::warn!("Verification for request id {} failed: {}", masked, error);
            to_response(&error)
        }
    }
}
