//! Application factory
//!
//! Builds the actix-web application around an already wired passcode
//! service so the binary and the integration tests share one routing table.

use actix_web::{middleware::Logger, web, App};

use otp_core::{NotifierTrait, OtpStoreTrait};
use otp_shared::CorsConfig;

use crate::handlers::error::{method_not_allowed, not_found};
use crate::middleware::cors::create_cors;
use crate::routes::health::health_check;
use crate::routes::otp::{otp_handler, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<S, N>(
    app_state: web::Data<AppState<S, N>>,
    cors: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: OtpStoreTrait + 'static,
    N: NotifierTrait + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(create_cors(cors))
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::resource("/api/otp")
                .route(web::post().to(otp_handler::<S, N>))
                .default_service(web::to(method_not_allowed)),
        )
        .default_service(web::to(not_found))
}
