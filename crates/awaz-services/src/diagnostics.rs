//! Live vendor connection checks

use awaz_core::traits::{ConversationalAgent, SpeechSynthesizer, TelephonyProvider};
use awaz_core::AppResult;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

const AGENT_ID_VAR: &str = "ELEVENLABS_AGENT_ID";
const AGENT_NOT_CONFIGURED: &str =
    "Agent ID not configured. Please set ELEVENLABS_AGENT_ID in environment variables.";

/// Outcome of one connection test
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionCheck {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConnectionCheck {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }

    fn from_result<T>(result: &AppResult<T>) -> Self {
        match result {
            Ok(_) => Self::ok(),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsReport {
    pub twilio: ConnectionCheck,
    pub elevenlabs: ConnectionCheck,
    pub conversational_ai: ConnectionCheck,
    /// Voices visible on the ElevenLabs account, when listing worked
    pub voice_count: Option<usize>,
}

impl DiagnosticsReport {
    pub fn all_passed(&self) -> bool {
        self.twilio.success && self.elevenlabs.success && self.conversational_ai.success
    }
}

pub struct DiagnosticsService {
    telephony: Arc<dyn TelephonyProvider>,
    speech: Arc<dyn SpeechSynthesizer>,
    agent: Arc<dyn ConversationalAgent>,
}

impl DiagnosticsService {
    pub fn new(
        telephony: Arc<dyn TelephonyProvider>,
        speech: Arc<dyn SpeechSynthesizer>,
        agent: Arc<dyn ConversationalAgent>,
    ) -> Self {
        Self {
            telephony,
            speech,
            agent,
        }
    }

    /// Contact both vendors and report what works
    #[instrument(skip(self))]
    pub async fn run(&self) -> DiagnosticsReport {
        let (account, voices) = tokio::join!(self.telephony.verify_account(), self.speech.list_voices());

        let twilio = ConnectionCheck::from_result(&account);
        let elevenlabs = ConnectionCheck::from_result(&voices);

        // The agent check reuses the voice listing to prove the API key works
        let conversational_ai = if !elevenlabs.success {
            elevenlabs.clone()
        } else {
            match self.agent.missing_setting() {
                None => ConnectionCheck::ok(),
                Some(AGENT_ID_VAR) => ConnectionCheck::failed(AGENT_NOT_CONFIGURED),
                Some(var) => ConnectionCheck::failed(format!(
                    "{} not configured. Please set it in environment variables.",
                    var
                )),
            }
        };

        let report = DiagnosticsReport {
            twilio,
            elevenlabs,
            conversational_ai,
            voice_count: voices.as_ref().ok().map(Vec::len),
        };

        if report.all_passed() {
            info!("Vendor diagnostics passed");
        } else {
            warn!("Vendor diagnostics failed: {:?}", report);
        }

        report
    }
}
