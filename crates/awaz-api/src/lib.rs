//! API layer for Awaz.ai
//!
//! HTTP handlers for the demo call, the Twilio webhooks, the purchase
//! funnel and the server-rendered marketing pages.

#![forbid(unsafe_code)]

pub mod dto;
pub mod handlers;
pub mod site;

use actix_web::{error::InternalError, web, HttpResponse, ResponseError};
use awaz_core::traits::{ConversationalAgent, SpeechSynthesizer, TelephonyProvider};
use awaz_core::AppError;
use awaz_services::{
    CallLookupService, CallStatusRecorder, CheckoutService, ConversationService,
    DiagnosticsService, ServiceStatus, TestCallService,
};
use std::sync::Arc;

// Re-export DTOs (common types)
pub use dto::ApiResponse;

use handlers::{
    configure_checkout, configure_contact, configure_health, configure_pages, configure_purchase,
    configure_site_content, configure_twilio, configure_voice,
};

/// Shared application state, cloned into every worker
#[derive(Clone)]
pub struct AppServices {
    test_calls: web::Data<TestCallService>,
    conversations: web::Data<ConversationService>,
    call_lookup: web::Data<CallLookupService>,
    diagnostics: web::Data<DiagnosticsService>,
    speech: web::Data<dyn SpeechSynthesizer>,
    checkout: web::Data<CheckoutService>,
    call_status: web::Data<CallStatusRecorder>,
    status: web::Data<ServiceStatus>,
}

impl AppServices {
    /// Build every service around the vendor clients
    ///
    /// # Arguments
    ///
    /// * `status` - Vendor configuration flags, computed once from the config
    pub fn new(
        telephony: Arc<dyn TelephonyProvider>,
        speech: Arc<dyn SpeechSynthesizer>,
        agent: Arc<dyn ConversationalAgent>,
        status: ServiceStatus,
    ) -> Self {
        Self {
            test_calls: web::Data::new(TestCallService::new(telephony.clone(), speech.clone())),
            conversations: web::Data::new(ConversationService::new(agent.clone())),
            call_lookup: web::Data::new(CallLookupService::new(telephony.clone())),
            diagnostics: web::Data::new(DiagnosticsService::new(telephony, speech.clone(), agent)),
            speech: web::Data::from(speech),
            checkout: web::Data::new(CheckoutService::new()),
            call_status: web::Data::new(CallStatusRecorder::new()),
            status: web::Data::new(status),
        }
    }

    /// Register the state and every route
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.test_calls.clone())
            .app_data(self.conversations.clone())
            .app_data(self.call_lookup.clone())
            .app_data(self.diagnostics.clone())
            .app_data(self.speech.clone())
            .app_data(self.checkout.clone())
            .app_data(self.call_status.clone())
            .app_data(self.status.clone())
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let response = invalid_request(err.to_string());
                InternalError::from_response(err, response).into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                let response = invalid_request(err.to_string());
                InternalError::from_response(err, response).into()
            }))
            .configure(configure_routes);
    }
}

/// Malformed bodies get the same error envelope as every other failure
fn invalid_request(message: String) -> HttpResponse {
    AppError::InvalidInput(message).error_response()
}

/// Configure API routes and site pages
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(configure_health)
            .configure(configure_voice)
            .configure(configure_twilio)
            .configure(configure_purchase)
            .configure(configure_checkout)
            .configure(configure_contact)
            .configure(configure_site_content),
    )
    .configure(configure_pages);
}
