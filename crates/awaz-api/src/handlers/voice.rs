//! Demo call and voice handlers
//!
//! HTTP handlers for the landing page demo call, conversational AI calls and
//! the vendor diagnostics.

use crate::dto::voice::{ConversationCallRequest, ServiceStatusResponse, TestCallRequest};
use crate::dto::ApiResponse;
use actix_web::{web, HttpResponse};
use awaz_core::traits::SpeechSynthesizer;
use awaz_core::AppError;
use awaz_services::{
    CallLookupService, ConversationService, DiagnosticsService, ServiceStatus, TestCallService,
};
use tracing::{debug, info, instrument};

/// Place the demo call
///
/// POST /api/voice/test-call
#[instrument(skip(service, req))]
pub async fn create_test_call(
    service: web::Data<TestCallService>,
    req: web::Json<TestCallRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = service.initiate(req.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        outcome,
        "Call initiated successfully",
    )))
}

/// Which vendors are configured
///
/// GET /api/voice/test-call
pub async fn get_service_status(status: web::Data<ServiceStatus>) -> HttpResponse {
    HttpResponse::Ok().json(ServiceStatusResponse::from(*status.get_ref()))
}

/// Start a conversational AI call
///
/// POST /api/voice/conversation
#[instrument(skip(service, req))]
pub async fn start_conversation(
    service: web::Data<ConversationService>,
    req: web::Json<ConversationCallRequest>,
) -> Result<HttpResponse, AppError> {
    let started = service.start(req.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::with_message(
        started,
        "Conversational AI call initiated successfully",
    )))
}

/// Conversation status and transcript
///
/// GET /api/voice/conversation/{id}
#[instrument(skip(service))]
pub async fn get_conversation(
    service: web::Data<ConversationService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let details = service.details(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(details)))
}

/// Twilio call status
///
/// GET /api/voice/calls/{sid}
#[instrument(skip(service))]
pub async fn get_call(
    service: web::Data<CallLookupService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let details = service.status(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(details)))
}

/// Voices available to the ElevenLabs account
///
/// GET /api/voice/voices
#[instrument(skip(speech))]
pub async fn list_voices(speech: web::Data<dyn SpeechSynthesizer>) -> Result<HttpResponse, AppError> {
    let voices = speech.list_voices().await?;
    debug!("Listed {} voices", voices.len());
    Ok(HttpResponse::Ok().json(ApiResponse::success(voices)))
}

/// Live connection checks against both vendors
///
/// GET /api/voice/diagnostics
#[instrument(skip(service))]
pub async fn run_diagnostics(service: web::Data<DiagnosticsService>) -> HttpResponse {
    let report = service.run().await;
    info!(all_passed = report.all_passed(), "Diagnostics finished");
    HttpResponse::Ok().json(ApiResponse::success(report))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/voice")
            .route("/test-call", web::post().to(create_test_call))
            .route("/test-call", web::get().to(get_service_status))
            .route("/conversation", web::post().to(start_conversation))
            .route("/conversation/{id}", web::get().to(get_conversation))
            .route("/calls/{sid}", web::get().to(get_call))
            .route("/voices", web::get().to(list_voices))
            .route("/diagnostics", web::get().to(run_diagnostics)),
    );
}
