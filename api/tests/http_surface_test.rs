//! Tests for method handling, CORS and the auxiliary routes

use actix_web::{dev::ServiceResponse, http::StatusCode, test, web};
use serde_json::{json, Value};
use std::sync::Arc;

use otp_api::{create_app, AppState};
use otp_core::{OtpService, OtpServiceConfig};
use otp_infra::cache::InMemoryOtpStore;
use otp_infra::email::MockEmailService;
use otp_shared::CorsConfig;

fn app_state() -> web::Data<AppState<InMemoryOtpStore, MockEmailService>> {
    let config = OtpServiceConfig::default().with_recipient("owner@vrlcs.example");
    web::Data::new(AppState::new(OtpService::new(
        Arc::new(InMemoryOtpStore::new()),
        Arc::new(MockEmailService::new()),
        config,
    )))
}

fn allow_origin<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[actix_web::test]
async fn test_non_post_methods_are_rejected() {
    let app = test::init_service(create_app(app_state(), &CorsConfig::default())).await;

    for req in [
        test::TestRequest::get().uri("/api/otp").to_request(),
        test::TestRequest::put().uri("/api/otp").to_request(),
        test::TestRequest::delete().uri("/api/otp").to_request(),
    ] {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(allow_origin(&resp).as_deref(), Some("*"));
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "method not allowed"}));
    }
}

#[actix_web::test]
async fn test_configured_origin_on_success_and_error() {
    let cors = CorsConfig::new("https://vrlcs.example");
    let app = test::init_service(create_app(app_state(), &cors)).await;

    let req = test::TestRequest::post()
        .uri("/api/otp")
        .set_form([("action", "request"), ("purpose", "login")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(allow_origin(&resp).as_deref(), Some("https://vrlcs.example"));

    let req = test::TestRequest::post()
        .uri("/api/otp")
        .set_form([("action", "nope")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(allow_origin(&resp).as_deref(), Some("https://vrlcs.example"));
}

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(create_app(app_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_unknown_path() {
    let app = test::init_service(create_app(app_state(), &CorsConfig::default())).await;

    let req = test::TestRequest::post().uri("/api/other").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "not found"}));
}
