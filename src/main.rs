//! Awaz.ai web server
//!
//! Serves the marketing site, the purchase funnel and the demo call API,
//! and receives Twilio's webhooks.

use actix_cors::Cors;
use actix_web::{http::header, middleware, App, HttpServer};
use awaz_api::AppServices;
use awaz_core::traits::{ConversationalAgent, SpeechSynthesizer, TelephonyProvider};
use awaz_core::AppConfig;
use awaz_services::ServiceStatus;
use awaz_voice::{ElevenLabsClient, TwilioClient};
use std::env;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging
fn init_tracing() {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "awaz_web={},awaz_api={},awaz_services={},awaz_voice={},actix_web=info",
            log_level, log_level, log_level, log_level
        ))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    init_tracing();

    info!("Starting Awaz.ai web server v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load().map_err(|e| startup_error("Invalid configuration", e))?;

    let status = ServiceStatus::from_config(&config);
    if !config.twilio.is_configured() {
        warn!("Twilio credentials missing; demo calls will fail");
    }
    if !config.elevenlabs.is_configured() {
        warn!("ElevenLabs API key missing; speech generation will fail");
    }

    // Vendor clients
    let twilio = TwilioClient::new(&config.twilio, config.public_url())
        .map_err(|e| startup_error("Failed to create Twilio client", e))?;
    let elevenlabs = Arc::new(
        ElevenLabsClient::new(&config.elevenlabs)
            .map_err(|e| startup_error("Failed to create ElevenLabs client", e))?,
    );

    let telephony: Arc<dyn TelephonyProvider> = Arc::new(twilio);
    let speech: Arc<dyn SpeechSynthesizer> = elevenlabs.clone();
    let agent: Arc<dyn ConversationalAgent> = elevenlabs;

    let services = AppServices::new(telephony, speech, agent, status);

    let bind_addr = config.server_addr();
    let workers = config.server.workers.max(1);
    let cors_origins = config.server.cors_origins.clone();

    info!(
        "Starting HTTP server on {} with {} workers (public URL {})",
        bind_addr,
        workers,
        config.public_url()
    );

    HttpServer::new(move || {
        // Configure CORS - clone cors_origins for each worker
        let cors_origins_inner = cors_origins.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                let origins: Vec<&str> = cors_origins_inner.split(',').collect();
                if let Ok(origin_str) = origin.to_str() {
                    origins.iter().any(|o| o.trim() == origin_str)
                } else {
                    false
                }
            })
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        let services = services.clone();

        App::new()
            // Middleware
            .wrap(cors)
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            // State and routes
            .configure(|cfg| services.configure(cfg))
    })
    .workers(workers)
    .client_request_timeout(Duration::from_secs(config.server.timeout_secs))
    .bind(&bind_addr)?
    .run()
    .await
}
