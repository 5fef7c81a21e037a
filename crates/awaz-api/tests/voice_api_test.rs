//! HTTP tests for the demo call and voice endpoints

#[macro_use]
mod common;

use actix_web::test;
use awaz_core::models::CallScript;
use common::{FakeTwilio, Vendors};
use serde_json::{json, Value};

#[actix_web::test]
async fn test_call_is_placed() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let req = test::TestRequest::post()
        .uri("/api/voice/test-call")
        .set_json(json!({"phoneNumber": "98765 43210", "name": "Asha", "language": "hi"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Call initiated successfully");
    assert_eq!(body["data"]["callSid"], "CA0001");
    assert_eq!(body["data"]["phoneNumber"], "+919876543210");
    assert_eq!(body["data"]["status"], "queued");

    assert_eq!(vendors.elevenlabs.requests.lock().len(), 1);
    let placed = vendors.twilio.placed.lock();
    assert!(matches!(&placed[0].script, CallScript::Message { name, .. } if name == "Asha"));
}

#[actix_web::test]
async fn test_call_can_skip_speech_generation() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let req = test::TestRequest::post()
        .uri("/api/voice/test-call")
        .set_json(json!({"phoneNumber": "+9779812345678", "useElevenLabs": false}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert!(vendors.elevenlabs.requests.lock().is_empty());
}

#[actix_web::test]
async fn test_call_requires_phone_number() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let req = test::TestRequest::post()
        .uri("/api/voice/test-call")
        .set_json(json!({"name": "Asha"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Phone number is required");
    assert!(vendors.twilio.placed.lock().is_empty());
}

#[actix_web::test]
async fn test_call_rejects_malformed_number() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let req = test::TestRequest::post()
        .uri("/api/voice/test-call")
        .set_json(json!({"phoneNumber": "12345"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"],
        "Please enter a valid phone number (e.g., +911234567890 or 1234567890)"
    );
}

#[actix_web::test]
async fn test_call_reports_twilio_failure() {
    let vendors = Vendors::with_twilio(FakeTwilio {
        fail_with: Some("Twilio credentials not configured".to_string()),
        ..Default::default()
    });
    let app = test_app!(vendors);

    let req = test::TestRequest::post()
        .uri("/api/voice/test-call")
        .set_json(json!({"phoneNumber": "9876543210"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Twilio credentials not configured");
}

#[actix_web::test]
async fn test_malformed_json_uses_error_envelope() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let req = test::TestRequest::post()
        .uri("/api/voice/test-call")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "invalid_input");
}

#[actix_web::test]
async fn test_service_status() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let req = test::TestRequest::get().uri("/api/voice/test-call").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["ready"], false);
    assert_eq!(body["services"]["elevenlabs"]["status"], "ready");
    assert_eq!(body["services"]["twilio"]["configured"], false);
    assert_eq!(body["services"]["twilio"]["status"], "missing_credentials");
}

#[actix_web::test]
async fn test_conversation_flow() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let req = test::TestRequest::post()
        .uri("/api/voice/conversation")
        .set_json(json!({"phoneNumber": "98765-43210", "customerName": "Ravi"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["conversationId"], "conv_42");
    assert_eq!(vendors.agent.requests.lock()[0].to, "+919876543210");

    let req = test::TestRequest::get()
        .uri("/api/voice/conversation/conv_42")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["durationSecs"], 42);
    assert_eq!(body["data"]["transcript"][0]["message"], "Namaste!");

    let req = test::TestRequest::get()
        .uri("/api/voice/conversation/missing")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_call_lookup() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let req = test::TestRequest::get().uri("/api/voice/calls/CA77").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["sid"], "CA77");
    assert_eq!(body["data"]["status"], "in-progress");

    let req = test::TestRequest::get()
        .uri("/api/voice/calls/CAmissing")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_voices_and_diagnostics() {
    let vendors = Vendors::new();
    let app = test_app!(vendors);

    let req = test::TestRequest::get().uri("/api/voice/voices").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"][0]["name"], "Adam");

    let req = test::TestRequest::get()
        .uri("/api/voice/diagnostics")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["twilio"]["success"], true);
    assert_eq!(body["data"]["elevenlabs"]["success"], true);
    assert_eq!(body["data"]["conversationalAi"]["success"], true);
    assert_eq!(body["data"]["voiceCount"], 1);
}
