//! Seams to the voice vendors
//!
//! Services only talk to Twilio and ElevenLabs through these traits, so they
//! can be exercised against in-memory fakes.

use crate::error::AppError;
use crate::models::{
    CallDetails, ConversationDetails, ConversationRequest, ConversationStarted, OutboundCall,
    PlacedCall, SpeechAudio, SpeechRequest, VoiceInfo,
};
use async_trait::async_trait;

/// Places and inspects phone calls
#[async_trait]
pub trait TelephonyProvider: Send + Sync {
    /// Credentials and caller number are present
    fn is_configured(&self) -> bool;

    /// Number calls are placed from, if configured
    fn caller_id(&self) -> Option<String>;

    /// Place an outbound call
    async fn place_call(&self, call: &OutboundCall) -> Result<PlacedCall, AppError>;

    /// Fetch a call by sid
    async fn fetch_call(&self, sid: &str) -> Result<CallDetails, AppError>;

    /// Cheap authenticated request to confirm the credentials work
    async fn verify_account(&self) -> Result<(), AppError>;
}

/// Turns text into speech audio
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    fn is_configured(&self) -> bool;

    /// Generate audio for a text
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechAudio, AppError>;

    /// Voices available on the account
    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, AppError>;
}

/// Runs AI agent phone conversations
#[async_trait]
pub trait ConversationalAgent: Send + Sync {
    /// Environment variable of the first missing setting, if any
    fn missing_setting(&self) -> Option<&'static str>;

    /// Key, agent and agent phone number are present
    fn is_configured(&self) -> bool {
        self.missing_setting().is_none()
    }

    async fn start_call(
        &self,
        request: &ConversationRequest,
    ) -> Result<ConversationStarted, AppError>;

    async fn get_conversation(&self, conversation_id: &str)
        -> Result<ConversationDetails, AppError>;
}
