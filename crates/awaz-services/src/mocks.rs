//! In-memory vendor fakes shared by the service tests

use async_trait::async_trait;
use awaz_core::models::{
    CallDetails, CallStatus, ConversationDetails, ConversationRequest, ConversationStarted,
    OutboundCall, PlacedCall, SpeechAudio, SpeechRequest, VoiceInfo,
};
use awaz_core::traits::{ConversationalAgent, SpeechSynthesizer, TelephonyProvider};
use awaz_core::{AppError, AppResult};
use parking_lot::Mutex;
use std::collections::BTreeMap;

#[derive(Default)]
pub struct MockTelephony {
    pub fail_with: Option<String>,
    pub unconfigured: bool,
    pub placed: Mutex<Vec<OutboundCall>>,
}

impl MockTelephony {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn placed_count(&self) -> usize {
        self.placed.lock().len()
    }
}

#[async_trait]
impl TelephonyProvider for MockTelephony {
    fn is_configured(&self) -> bool {
        !self.unconfigured
    }

    fn caller_id(&self) -> Option<String> {
        Some("+15005550006".to_string())
    }

    async fn place_call(&self, call: &OutboundCall) -> AppResult<PlacedCall> {
        if let Some(message) = &self.fail_with {
            return Err(AppError::Vendor(message.clone()));
        }
        self.placed.lock().push(call.clone());
        Ok(PlacedCall {
            sid: "CA0001".to_string(),
            status: CallStatus::Queued,
        })
    }

    async fn fetch_call(&self, sid: &str) -> AppResult<CallDetails> {
        if let Some(message) = &self.fail_with {
            return Err(AppError::Vendor(message.clone()));
        }
        Ok(CallDetails {
            sid: sid.to_string(),
            status: CallStatus::Completed,
            duration: Some("12".to_string()),
            price: None,
            direction: Some("outbound-api".to_string()),
            start_time: None,
            end_time: None,
        })
    }

    async fn verify_account(&self) -> AppResult<()> {
        match &self.fail_with {
            Some(message) => Err(AppError::Vendor(message.clone())),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct MockSpeech {
    pub fail_with: Option<String>,
    pub requests: Mutex<Vec<SpeechRequest>>,
}

impl MockSpeech {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSpeech {
    fn is_configured(&self) -> bool {
        true
    }

    async fn synthesize(&self, request: &SpeechRequest) -> AppResult<SpeechAudio> {
        self.requests.lock().push(request.clone());
        match &self.fail_with {
            Some(message) => Err(AppError::NotConfigured(message.clone())),
            None => Ok(SpeechAudio::new(vec![0u8; 48_000])),
        }
    }

    async fn list_voices(&self) -> AppResult<Vec<VoiceInfo>> {
        if let Some(message) = &self.fail_with {
            return Err(AppError::Vendor(message.clone()));
        }
        Ok(vec![VoiceInfo {
            voice_id: "pNInz6obpgDQGcFmaJgB".to_string(),
            name: "Adam".to_string(),
            category: Some("premade".to_string()),
            labels: BTreeMap::new(),
            preview_url: None,
        }])
    }
}

#[derive(Default)]
pub struct MockAgent {
    pub missing: Option<&'static str>,
    pub requests: Mutex<Vec<ConversationRequest>>,
}

#[async_trait]
impl ConversationalAgent for MockAgent {
    fn missing_setting(&self) -> Option<&'static str> {
        self.missing
    }

    async fn start_call(&self, request: &ConversationRequest) -> AppResult<ConversationStarted> {
        self.requests.lock().push(request.clone());
        Ok(ConversationStarted {
            conversation_id: "conv_1".to_string(),
            call_sid: Some("CA0002".to_string()),
            status: "initiated".to_string(),
        })
    }

    async fn get_conversation(&self, conversation_id: &str) -> AppResult<ConversationDetails> {
        if conversation_id == "missing" {
            return Err(AppError::NotFound("Conversation missing".to_string()));
        }
        Ok(ConversationDetails {
            id: conversation_id.to_string(),
            status: "done".to_string(),
            agent_id: Some("agent_1".to_string()),
            customer_phone_number: None,
            start_time: None,
            duration_secs: Some(30),
            transcript: Vec::new(),
        })
    }
}
