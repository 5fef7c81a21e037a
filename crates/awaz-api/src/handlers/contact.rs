//! Contact form handler

use crate::dto::contact::{ContactAck, ContactRequest};
use crate::dto::ApiResponse;
use actix_web::{web, HttpResponse};
use awaz_core::AppError;
use tracing::{info, instrument, warn};
use validator::Validate;

/// Acknowledge a contact request. Nothing is stored or forwarded.
///
/// POST /api/contact
#[instrument(skip(req))]
pub async fn submit_contact(req: web::Json<ContactRequest>) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Contact form validation failed: {}", e);
        AppError::from(e)
    })?;
    req.validate_business_rules()?;

    info!(
        business = %req.business,
        language = ?req.preferred_language,
        "Contact request received"
    );

    let ack = ContactAck::new();
    Ok(HttpResponse::Ok().json(ApiResponse::with_message(ack.clone(), ack.message)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::post().to(submit_contact));
}
