//! Twilio webhooks
//!
//! Both webhooks always answer 200: Twilio retries or drops the call on
//! anything else.

use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse};
use awaz_core::models::twiml::{error_response, render_call_script};
use awaz_core::models::{CallStatusCallback, TwimlOptions};
use awaz_services::CallStatusRecorder;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use tracing::{error, info, instrument};

/// Decode a urlencoded query or form, keeping the first value of repeated keys
fn first_values<T: DeserializeOwned>(input: &[u8]) -> Result<T, String> {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_bytes(input).map_err(|e| e.to_string())?;

    let mut fields = Map::new();
    for (key, value) in pairs {
        fields.entry(key).or_insert(Value::String(value));
    }
    serde_json::from_value(Value::Object(fields)).map_err(|e| e.to_string())
}

fn twiml(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::xml())
        .body(body)
}

/// Script Twilio plays once the callee answers
///
/// GET|POST /api/twilio/voice-response?message=&name=&audioUrl=
#[instrument(skip(req))]
pub async fn voice_response(req: HttpRequest) -> HttpResponse {
    match first_values::<TwimlOptions>(req.query_string().as_bytes()) {
        Ok(options) => {
            info!(
                has_audio = options.audio_url.is_some(),
                name = ?options.name,
                "Rendering call script"
            );
            twiml(render_call_script(&options))
        }
        Err(e) => {
            error!("Voice response error: {}", e);
            twiml(error_response())
        }
    }
}

/// GET /api/twilio/call-status
pub async fn call_status_info() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Twilio call status webhook endpoint" }))
}

/// Status callback, form encoded
///
/// POST /api/twilio/call-status
#[instrument(skip(recorder, body))]
pub async fn call_status(recorder: web::Data<CallStatusRecorder>, body: web::Bytes) -> HttpResponse {
    match first_values::<CallStatusCallback>(&body) {
        Ok(callback) => {
            recorder.record(&callback);
            HttpResponse::Ok().json(json!({ "received": true }))
        }
        Err(e) => {
            error!("Error processing call status webhook: {}", e);
            HttpResponse::Ok().json(json!({ "error": "Processing failed" }))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/twilio")
            .route("/voice-response", web::get().to(voice_response))
            .route("/voice-response", web::post().to(voice_response))
            .route("/call-status", web::get().to(call_status_info))
            .route("/call-status", web::post().to(call_status)),
    );
}
