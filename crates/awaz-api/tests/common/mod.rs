//! Shared fixtures for the HTTP tests: in-memory vendors and an app builder

#![allow(dead_code)]

use async_trait::async_trait;
use awaz_api::AppServices;
use awaz_core::models::{
    CallDetails, CallStatus, ConversationDetails, ConversationRequest, ConversationStarted,
    OutboundCall, PlacedCall, SpeechAudio, SpeechRequest, TranscriptTurn, VoiceInfo,
};
use awaz_core::traits::{ConversationalAgent, SpeechSynthesizer, TelephonyProvider};
use awaz_core::{AppError, AppResult};
use awaz_services::ServiceStatus;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Default)]
pub struct FakeTwilio {
    pub fail_with: Option<String>,
    pub placed: Mutex<Vec<OutboundCall>>,
}

#[async_trait]
impl TelephonyProvider for FakeTwilio {
    fn is_configured(&self) -> bool {
        self.fail_with.is_none()
    }

    fn caller_id(&self) -> Option<String> {
        Some("+15005550006".to_string())
    }

    async fn place_call(&self, call: &OutboundCall) -> AppResult<PlacedCall> {
        if let Some(message) = &self.fail_with {
            return Err(AppError::NotConfigured(message.clone()));
        }
        self.placed.lock().push(call.clone());
        Ok(PlacedCall {
            sid: "CA0001".to_string(),
            status: CallStatus::Queued,
        })
    }

    async fn fetch_call(&self, sid: &str) -> AppResult<CallDetails> {
        if sid == "CAmissing" {
            return Err(AppError::NotFound("The requested resource was not found".to_string()));
        }
        Ok(CallDetails {
            sid: sid.to_string(),
            status: CallStatus::InProgress,
            duration: None,
            price: None,
            direction: Some("outbound-api".to_string()),
            start_time: None,
            end_time: None,
        })
    }

    async fn verify_account(&self) -> AppResult<()> {
        match &self.fail_with {
            Some(message) => Err(AppError::NotConfigured(message.clone())),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct FakeElevenLabs {
    pub requests: Mutex<Vec<SpeechRequest>>,
}

#[async_trait]
impl SpeechSynthesizer for FakeElevenLabs {
    fn is_configured(&self) -> bool {
        true
    }

    async fn synthesize(&self, request: &SpeechRequest) -> AppResult<SpeechAudio> {
        self.requests.lock().push(request.clone());
        Ok(SpeechAudio::new(vec![0u8; 16_000]))
    }

    async fn list_voices(&self) -> AppResult<Vec<VoiceInfo>> {
        Ok(vec![VoiceInfo {
            voice_id: "pNInz6obpgDQGcFmaJgB".to_string(),
            name: "Adam".to_string(),
            category: Some("premade".to_string()),
            labels: BTreeMap::from([("accent".to_string(), "american".to_string())]),
            preview_url: None,
        }])
    }
}

#[derive(Default)]
pub struct FakeAgent {
    pub requests: Mutex<Vec<ConversationRequest>>,
}

#[async_trait]
impl ConversationalAgent for FakeAgent {
    fn missing_setting(&self) -> Option<&'static str> {
        None
    }

    async fn start_call(&self, request: &ConversationRequest) -> AppResult<ConversationStarted> {
        self.requests.lock().push(request.clone());
        Ok(ConversationStarted {
            conversation_id: "conv_42".to_string(),
            call_sid: Some("CA0042".to_string()),
            status: "initiated".to_string(),
        })
    }

    async fn get_conversation(&self, conversation_id: &str) -> AppResult<ConversationDetails> {
        if conversation_id == "missing" {
            return Err(AppError::NotFound(format!("Conversation {}", conversation_id)));
        }
        Ok(ConversationDetails {
            id: conversation_id.to_string(),
            status: "done".to_string(),
            agent_id: Some("agent_1".to_string()),
            customer_phone_number: Some("+919876543210".to_string()),
            start_time: None,
            duration_secs: Some(42),
            transcript: vec![TranscriptTurn {
                role: "agent".to_string(),
                message: Some("Namaste!".to_string()),
                time_in_call_secs: Some(0),
            }],
        })
    }
}

/// Vendor fakes kept around so tests can inspect what was sent
pub struct Vendors {
    pub twilio: Arc<FakeTwilio>,
    pub elevenlabs: Arc<FakeElevenLabs>,
    pub agent: Arc<FakeAgent>,
}

impl Vendors {
    pub fn new() -> Self {
        Self::with_twilio(FakeTwilio::default())
    }

    pub fn with_twilio(twilio: FakeTwilio) -> Self {
        Self {
            twilio: Arc::new(twilio),
            elevenlabs: Arc::new(FakeElevenLabs::default()),
            agent: Arc::new(FakeAgent::default()),
        }
    }

    pub fn services(&self) -> AppServices {
        AppServices::new(
            self.twilio.clone(),
            self.elevenlabs.clone(),
            self.agent.clone(),
            ServiceStatus::from_flags(true, false),
        )
    }
}

/// Build the full app around `$vendors`
macro_rules! test_app {
    ($vendors:expr) => {{
        let services = $vendors.services();
        actix_web::test::init_service(
            actix_web::App::new().configure(|cfg| services.configure(cfg)),
        )
        .await
    }};
}
