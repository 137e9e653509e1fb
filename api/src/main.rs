use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::{info, warn};
use std::sync::Arc;

use otp_api::{create_app, AppState};
use otp_core::{OtpService, OtpServiceConfig};
use otp_infra::{create_notifier, create_otp_store};
use otp_shared::{AppConfig, Environment};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(Environment::from_env().default_log_level()),
    );

    let config = AppConfig::from_env();

    info!("Starting OTP relay in {} mode", config.environment);

    for warning in config.warnings() {
        warn!("{}", warning);
    }

    let service_config = OtpServiceConfig::from_app_config(&config);

    let store = Arc::new(create_otp_store(&config.store));
    let notifier = Arc::new(create_notifier(&config.email));
    let app_state = web::Data::new(AppState::new(OtpService::new(
        store,
        notifier,
        service_config,
    )));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors = config.cors.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &cors));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}
