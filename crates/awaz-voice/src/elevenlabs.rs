//! ElevenLabs client
//!
//! Text to speech, voice listing and conversational AI phone calls. Every
//! request authenticates with the `xi-api-key` header.

use async_trait::async_trait;
use awaz_core::config::ElevenLabsConfig;
use awaz_core::models::{
    ConversationDetails, ConversationRequest, ConversationStarted, SpeechAudio, SpeechRequest,
    TranscriptTurn, VoiceInfo, VoiceSettings,
};
use awaz_core::traits::{ConversationalAgent, SpeechSynthesizer};
use awaz_core::AppError;
use chrono::DateTime;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, error, info, instrument};

use crate::error::VoiceError;

const API_KEY_HEADER: &str = "xi-api-key";
const API_KEY_MISSING: &str = "ElevenLabs API key not configured";
const AGENT_MISSING: &str =
    "Agent ID not provided. Please configure ELEVENLABS_AGENT_ID in environment variables.";
const PHONE_NUMBER_MISSING: &str =
    "Agent phone number not configured. Please set ELEVENLABS_PHONE_NUMBER_ID in environment variables.";

/// Client for the ElevenLabs API
pub struct ElevenLabsClient {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
    agent_id: Option<String>,
    voice_id: Option<String>,
    phone_number_id: Option<String>,
    model_id: String,
    timeout_ms: Option<u64>,
}

impl ElevenLabsClient {
    /// Create a client from the ElevenLabs config section
    pub fn new(config: &ElevenLabsConfig) -> Result<Self, VoiceError> {
        let http_client = crate::http_client(config.timeout_ms)?;

        Ok(Self {
            http_client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: non_blank(&config.api_key),
            agent_id: non_blank(&config.agent_id),
            voice_id: non_blank(&config.voice_id),
            phone_number_id: non_blank(&config.phone_number_id),
            model_id: config.model_id.clone(),
            timeout_ms: config.timeout_ms,
        })
    }

    fn api_key(&self) -> Result<&str, VoiceError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| VoiceError::NotConfigured(API_KEY_MISSING.to_string()))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url, path)
    }

    /// Send a request and reject non-2xx replies
    async fn send(&self, request: RequestBuilder) -> Result<Response, VoiceError> {
        let response = request
            .send()
            .await
            .map_err(|e| VoiceError::from_reqwest(e, self.timeout_ms))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = api_error_message(&body).unwrap_or_else(|| {
            format!("ElevenLabs request failed with status {}", status.as_u16())
        });
        error!("ElevenLabs API error: status={}, message={}", status, message);

        Err(VoiceError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<R: for<'de> Deserialize<'de>>(
        &self,
        request: RequestBuilder,
    ) -> Result<R, VoiceError> {
        let body = self
            .send(request)
            .await?
            .text()
            .await
            .map_err(|e| VoiceError::Parse(format!("Failed to read response body: {}", e)))?;

        debug!("ElevenLabs response: {}", body);

        serde_json::from_str(&body)
            .map_err(|e| VoiceError::Parse(format!("Failed to parse JSON: {}", e)))
    }

    /// Generate speech for a text
    #[instrument(skip(self, request), fields(language = request.language.code()))]
    pub async fn text_to_speech(&self, request: &SpeechRequest) -> Result<SpeechAudio, VoiceError> {
        let api_key = self.api_key()?;
        let voice_id = request
            .voice_id
            .as_deref()
            .unwrap_or_else(|| request.language.voice_id(self.voice_id.as_deref()));

        info!(
            "Generating speech: \"{}...\" in {}",
            request.preview(),
            request.language.code()
        );

        let body = SpeechBody {
            text: &request.text,
            model_id: &self.model_id,
            voice_settings: &request.settings,
        };

        let response = self
            .send(
                self.http_client
                    .post(self.url(&format!("text-to-speech/{}", urlencoding::encode(voice_id))))
                    .header(API_KEY_HEADER, api_key)
                    .header(reqwest::header::ACCEPT, "audio/mpeg")
                    .json(&body),
            )
            .await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| VoiceError::Parse(format!("Failed to read audio: {}", e)))?;

        let audio = SpeechAudio::new(bytes.to_vec());
        info!("Speech generated successfully: {} bytes", audio.len());
        Ok(audio)
    }

    /// Voices on the account
    #[instrument(skip(self))]
    pub async fn voices(&self) -> Result<Vec<VoiceInfo>, VoiceError> {
        let api_key = self.api_key()?;

        let reply: VoicesReply = self
            .send_json(self.http_client.get(self.url("voices")).header(API_KEY_HEADER, api_key))
            .await?;

        Ok(reply.voices.into_iter().map(VoiceWire::into_info).collect())
    }

    /// Have the agent call a phone number through the linked Twilio number
    #[instrument(skip(self, request), fields(to = %request.to))]
    pub async fn outbound_call(
        &self,
        request: &ConversationRequest,
    ) -> Result<ConversationStarted, VoiceError> {
        let api_key = self.api_key()?;
        let agent_id = request
            .agent_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .or(self.agent_id.as_deref())
            .ok_or_else(|| VoiceError::NotConfigured(AGENT_MISSING.to_string()))?;
        let phone_number_id = self
            .phone_number_id
            .as_deref()
            .ok_or_else(|| VoiceError::NotConfigured(PHONE_NUMBER_MISSING.to_string()))?;

        info!(
            "Making conversational call to: {} with agent: {}",
            request.to, agent_id
        );
        debug!("Custom variables: {:?}", request.variables);

        let body = OutboundCallBody {
            agent_id,
            agent_phone_number_id: phone_number_id,
            to_number: &request.to,
            conversation_initiation_client_data: (!request.variables.is_empty()).then(|| {
                ClientData {
                    dynamic_variables: &request.variables,
                }
            }),
        };

        let reply: OutboundCallReply = self
            .send_json(
                self.http_client
                    .post(self.url("convai/twilio/outbound-call"))
                    .header(API_KEY_HEADER, api_key)
                    .json(&body),
            )
            .await?;

        let started = reply.into_started()?;
        info!("Conversational call initiated: {}", started.conversation_id);
        Ok(started)
    }

    /// Conversation state and transcript
    #[instrument(skip(self))]
    pub async fn conversation(&self, conversation_id: &str) -> Result<ConversationDetails, VoiceError> {
        let api_key = self.api_key()?;

        let reply: ConversationReply = self
            .send_json(
                self.http_client
                    .get(self.url(&format!(
                        "convai/conversations/{}",
                        urlencoding::encode(conversation_id)
                    )))
                    .header(API_KEY_HEADER, api_key),
            )
            .await?;

        Ok(reply.into_details())
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechAudio, AppError> {
        Ok(self.text_to_speech(request).await?)
    }

    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, AppError> {
        Ok(self.voices().await?)
    }
}

#[async_trait]
impl ConversationalAgent for ElevenLabsClient {
    fn missing_setting(&self) -> Option<&'static str> {
        if self.api_key.is_none() {
            Some("ELEVENLABS_API_KEY")
        } else if self.agent_id.is_none() {
            Some("ELEVENLABS_AGENT_ID")
        } else if self.phone_number_id.is_none() {
            Some("ELEVENLABS_PHONE_NUMBER_ID")
        } else {
            None
        }
    }

    async fn start_call(
        &self,
        request: &ConversationRequest,
    ) -> Result<ConversationStarted, AppError> {
        Ok(self.outbound_call(request).await?)
    }

    async fn get_conversation(
        &self,
        conversation_id: &str,
    ) -> Result<ConversationDetails, AppError> {
        Ok(self.conversation(conversation_id).await?)
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct SpeechBody<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
}

#[derive(Debug, Deserialize)]
struct VoicesReply {
    #[serde(default)]
    voices: Vec<VoiceWire>,
}

#[derive(Debug, Deserialize)]
struct VoiceWire {
    voice_id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    labels: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    preview_url: Option<String>,
}

impl VoiceWire {
    fn into_info(self) -> VoiceInfo {
        let labels = self
            .labels
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(k, v)| match v {
                Value::String(s) => Some((k, s)),
                Value::Null => None,
                other => Some((k, other.to_string())),
            })
            .collect();

        VoiceInfo {
            name: self.name.unwrap_or_else(|| self.voice_id.clone()),
            voice_id: self.voice_id,
            category: self.category,
            labels,
            preview_url: self.preview_url,
        }
    }
}

#[derive(Debug, Serialize)]
struct OutboundCallBody<'a> {
    agent_id: &'a str,
    agent_phone_number_id: &'a str,
    to_number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_initiation_client_data: Option<ClientData<'a>>,
}

#[derive(Debug, Serialize)]
struct ClientData<'a> {
    dynamic_variables: &'a BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct OutboundCallReply {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    conversation_id: Option<String>,
    #[serde(default, rename = "callSid")]
    call_sid: Option<String>,
}

impl OutboundCallReply {
    fn into_started(self) -> Result<ConversationStarted, VoiceError> {
        if self.success == Some(false) {
            return Err(VoiceError::Api {
                status: 502,
                message: self
                    .message
                    .unwrap_or_else(|| "Failed to initiate conversational call".to_string()),
            });
        }

        let conversation_id = self
            .conversation_id
            .ok_or_else(|| VoiceError::Parse("conversation_id missing from reply".to_string()))?;

        Ok(ConversationStarted {
            conversation_id,
            call_sid: self.call_sid,
            status: "initiated".to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ConversationReply {
    conversation_id: String,
    status: String,
    #[serde(default)]
    agent_id: Option<String>,
    #[serde(default)]
    transcript: Option<Vec<TranscriptTurn>>,
    #[serde(default)]
    metadata: Option<ConversationMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct ConversationMetadata {
    #[serde(default)]
    start_time_unix_secs: Option<i64>,
    #[serde(default)]
    call_duration_secs: Option<u64>,
    #[serde(default)]
    phone_call: Option<PhoneCallMetadata>,
}

#[derive(Debug, Deserialize)]
struct PhoneCallMetadata {
    #[serde(default)]
    external_number: Option<String>,
}

impl ConversationReply {
    fn into_details(self) -> ConversationDetails {
        let metadata = self.metadata.unwrap_or_default();

        ConversationDetails {
            id: self.conversation_id,
            status: self.status,
            agent_id: self.agent_id,
            customer_phone_number: metadata.phone_call.and_then(|p| p.external_number),
            start_time: metadata
                .start_time_unix_secs
                .and_then(|secs| DateTime::from_timestamp(secs, 0)),
            duration_secs: metadata.call_duration_secs,
            transcript: self.transcript.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Value,
}

/// ElevenLabs puts the reason under `detail`, as a string, an object with a
/// `message`, or a list of validation errors
fn api_error_message(body: &str) -> Option<String> {
    match serde_json::from_str::<ErrorBody>(body).ok()?.detail {
        Value::String(message) => Some(message),
        Value::Object(map) => map.get("message")?.as_str().map(str::to_string),
        Value::Array(items) => items.first()?.get("msg")?.as_str().map(str::to_string),
        _ => None,
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
