//! Outbound calls and call-status webhooks
//!
//! Shapes here mirror what the telephony vendor sends and expects; they are
//! passed through, not designed by us.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Path Twilio fetches the call script from
pub const VOICE_RESPONSE_PATH: &str = "/api/twilio/voice-response";

/// Path Twilio posts status callbacks to
pub const CALL_STATUS_PATH: &str = "/api/twilio/call-status";

/// Progress events we subscribe to
pub const STATUS_CALLBACK_EVENTS: [&str; 4] = ["initiated", "ringing", "answered", "completed"];

/// What the callee hears
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallScript {
    /// Pre-generated audio hosted somewhere Twilio can fetch
    Audio { url: String },
    /// Text spoken by Twilio's text to speech, `{{name}}` personalized
    Message { text: String, name: String },
}

/// A call to be placed by the telephony provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundCall {
    /// Destination in `+<digits>` form
    pub to: String,
    pub script: CallScript,
}

impl OutboundCall {
    pub fn with_message(to: impl Into<String>, text: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            script: CallScript::Message {
                text: text.into(),
                name: name.into(),
            },
        }
    }

    pub fn with_audio(to: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            script: CallScript::Audio { url: url.into() },
        }
    }

    /// Webhook URL that renders this call's script
    pub fn voice_response_url(&self, public_url: &str) -> String {
        let base = public_url.trim_end_matches('/');
        match &self.script {
            CallScript::Audio { url } => format!(
                "{}{}?audioUrl={}",
                base,
                VOICE_RESPONSE_PATH,
                urlencoding::encode(url)
            ),
            CallScript::Message { text, name } => format!(
                "{}{}?message={}&name={}",
                base,
                VOICE_RESPONSE_PATH,
                urlencoding::encode(text),
                urlencoding::encode(name)
            ),
        }
    }
}

/// Webhook URL for status callbacks
pub fn status_callback_url(public_url: &str) -> String {
    format!("{}{}", public_url.trim_end_matches('/'), CALL_STATUS_PATH)
}

/// Call progress as reported by Twilio
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallStatus {
    Queued,
    Initiated,
    Ringing,
    Answered,
    InProgress,
    Completed,
    Failed,
    Busy,
    NoAnswer,
    Canceled,
    Other(String),
}

impl CallStatus {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "queued" => CallStatus::Queued,
            "initiated" => CallStatus::Initiated,
            "ringing" => CallStatus::Ringing,
            "answered" => CallStatus::Answered,
            "in-progress" => CallStatus::InProgress,
            "completed" => CallStatus::Completed,
            "failed" => CallStatus::Failed,
            "busy" => CallStatus::Busy,
            "no-answer" => CallStatus::NoAnswer,
            "canceled" => CallStatus::Canceled,
            other => CallStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CallStatus::Queued => "queued",
            CallStatus::Initiated => "initiated",
            CallStatus::Ringing => "ringing",
            CallStatus::Answered => "answered",
            CallStatus::InProgress => "in-progress",
            CallStatus::Completed => "completed",
            CallStatus::Failed => "failed",
            CallStatus::Busy => "busy",
            CallStatus::NoAnswer => "no-answer",
            CallStatus::Canceled => "canceled",
            CallStatus::Other(s) => s,
        }
    }

    /// No further callbacks follow this status
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            CallStatus::Completed
                | CallStatus::Failed
                | CallStatus::Busy
                | CallStatus::NoAnswer
                | CallStatus::Canceled
        )
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CallStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CallStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(CallStatus::parse(&s))
    }
}

/// Form body of Twilio's status callback
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CallStatusCallback {
    pub call_sid: Option<String>,
    pub call_status: Option<String>,
    pub call_duration: Option<String>,
    pub to: Option<String>,
    pub from: Option<String>,
    pub timestamp: Option<String>,
}

impl CallStatusCallback {
    pub fn status(&self) -> CallStatus {
        CallStatus::parse(self.call_status.as_deref().unwrap_or_default())
    }

    pub fn sid(&self) -> &str {
        self.call_sid.as_deref().unwrap_or("unknown")
    }

    pub fn duration_secs(&self) -> Option<u64> {
        self.call_duration.as_deref()?.trim().parse().ok()
    }
}

/// Provider's acknowledgement of a placed call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCall {
    pub sid: String,
    pub status: CallStatus,
}

/// Provider's view of an existing call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallDetails {
    pub sid: String,
    pub status: CallStatus,
    pub duration: Option<String>,
    pub price: Option<String>,
    pub direction: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

/// A conversational AI call request
#[derive(Debug, Clone, Default)]
pub struct ConversationRequest {
    /// Destination, normalized leniently by the service
    pub to: String,
    /// Agent override; the configured agent is used otherwise
    pub agent_id: Option<String>,
    pub variables: BTreeMap<String, String>,
}

/// Vendor acknowledgement of a conversational call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationStarted {
    pub conversation_id: String,
    pub call_sid: Option<String>,
    pub status: String,
}

/// Conversation state and transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationDetails {
    pub id: String,
    pub status: String,
    pub agent_id: Option<String>,
    pub customer_phone_number: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub duration_secs: Option<u64>,
    pub transcript: Vec<TranscriptTurn>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptTurn {
    pub role: String,
    pub message: Option<String>,
    #[serde(default)]
    pub time_in_call_secs: Option<u64>,
}
