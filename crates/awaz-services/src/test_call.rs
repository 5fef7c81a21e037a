//! Demo call service
//!
//! Places the "try it yourself" call from the landing page: validate the
//! number, optionally generate the greeting with ElevenLabs, then have Twilio
//! dial out.

use awaz_core::models::twiml::DEFAULT_NAME;
use awaz_core::models::voice::test_message;
use awaz_core::models::{CallStatus, OutboundCall, PhoneNumber, SpeechRequest, SupportedLanguage};
use awaz_core::traits::{SpeechSynthesizer, TelephonyProvider};
use awaz_core::{AppError, AppResult};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Input of a demo call
#[derive(Debug, Clone)]
pub struct TestCallCommand {
    pub phone_number: Option<String>,
    pub name: Option<String>,
    /// Language code; English when absent
    pub language: Option<String>,
    pub use_elevenlabs: bool,
}

impl Default for TestCallCommand {
    fn default() -> Self {
        Self {
            phone_number: None,
            name: None,
            language: None,
            use_elevenlabs: true,
        }
    }
}

/// A call Twilio accepted
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCallOutcome {
    pub call_sid: String,
    pub phone_number: String,
    pub name: String,
    pub language: SupportedLanguage,
    pub message: String,
    pub status: CallStatus,
}

pub struct TestCallService {
    telephony: Arc<dyn TelephonyProvider>,
    speech: Arc<dyn SpeechSynthesizer>,
}

impl TestCallService {
    pub fn new(telephony: Arc<dyn TelephonyProvider>, speech: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { telephony, speech }
    }

    /// Place a demo call.
    ///
    /// # Errors
    ///
    /// - `Validation` for a missing or malformed number, or an unknown language
    /// - `VoiceGeneration` when speech generation fails; no call is placed then
    /// - `Vendor` when Twilio refuses the call
    #[instrument(skip(self, command))]
    pub async fn initiate(&self, command: TestCallCommand) -> AppResult<TestCallOutcome> {
        let phone = PhoneNumber::parse(command.phone_number.as_deref().unwrap_or_default())
            .map_err(|e| {
                warn!("Rejected demo call number: {}", e);
                AppError::from(e)
            })?;

        let language = parse_language(command.language.as_deref())?;

        let name = command
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_NAME.to_string());
        let message = test_message(&name);

        info!("Initiating test call to {} for {}", phone, name);

        if command.use_elevenlabs {
            info!("Generating speech with ElevenLabs...");
            let audio = self
                .speech
                .synthesize(&SpeechRequest::new(message.as_str(), language))
                .await
                .map_err(|e| {
                    error!("Speech generation failed: {}", e);
                    AppError::VoiceGeneration(e.to_string())
                })?;
            info!(
                "Speech ready: {} bytes, ~{}s",
                audio.len(),
                audio.estimated_duration_secs()
            );
        }

        // The generated audio has no public URL yet, so Twilio speaks the text itself
        let call = OutboundCall::with_message(phone.as_str(), message.as_str(), name.as_str());
        let placed = self.telephony.place_call(&call).await.map_err(|e| {
            error!("Twilio call failed: {}", e);
            AppError::Vendor(e.to_string())
        })?;

        info!("Call initiated successfully: {}", placed.sid);

        Ok(TestCallOutcome {
            call_sid: placed.sid,
            phone_number: phone.into_inner(),
            name,
            language,
            message,
            status: placed.status,
        })
    }
}

fn parse_language(code: Option<&str>) -> AppResult<SupportedLanguage> {
    match code.map(str::trim).filter(|c| !c.is_empty()) {
        None => Ok(SupportedLanguage::default()),
        Some(code) => SupportedLanguage::from_code(code)
            .ok_or_else(|| AppError::Validation(format!("Unsupported language: {}", code))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockSpeech, MockTelephony};
    use awaz_core::models::CallScript;

    fn service(telephony: Arc<MockTelephony>, speech: Arc<MockSpeech>) -> TestCallService {
        TestCallService::new(telephony, speech)
    }

    fn command(phone: &str) -> TestCallCommand {
        TestCallCommand {
            phone_number: Some(phone.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_successful_call() {
        let telephony = Arc::new(MockTelephony::default());
        let speech = Arc::new(MockSpeech::default());
        let svc = service(telephony.clone(), speech.clone());

        let outcome = svc
            .initiate(TestCallCommand {
                name: Some("Asha".to_string()),
                language: Some("hi".to_string()),
                ..command("98765 43210")
            })
            .await
            .unwrap();

        assert_eq!(outcome.call_sid, "CA0001");
        assert_eq!(outcome.phone_number, "+919876543210");
        assert_eq!(outcome.name, "Asha");
        assert_eq!(outcome.language, SupportedLanguage::Hi);
        assert_eq!(outcome.status, CallStatus::Queued);
        assert!(outcome.message.starts_with("Hello Asha!"));

        assert_eq!(speech.request_count(), 1);
        let placed = telephony.placed.lock();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].to, "+919876543210");
        assert_eq!(
            placed[0].script,
            CallScript::Message {
                text: outcome.message.clone(),
                name: "Asha".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_name_defaults_to_friend() {
        let svc = service(Arc::new(MockTelephony::default()), Arc::new(MockSpeech::default()));
        let outcome = svc
            .initiate(TestCallCommand {
                name: Some("   ".to_string()),
                ..command("+9779812345678")
            })
            .await
            .unwrap();

        assert_eq!(outcome.name, "Friend");
        assert_eq!(outcome.phone_number, "+9779812345678");
        assert_eq!(outcome.language, SupportedLanguage::En);
    }

    #[tokio::test]
    async fn test_missing_phone_number() {
        let telephony = Arc::new(MockTelephony::default());
        let svc = service(telephony.clone(), Arc::new(MockSpeech::default()));

        let err = svc.initiate(TestCallCommand::default()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "Phone number is required");

        let err = svc.initiate(command("  ")).await.unwrap_err();
        assert_eq!(err.to_string(), "Phone number is required");
        assert_eq!(telephony.placed_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_phone_number() {
        let telephony = Arc::new(MockTelephony::default());
        let speech = Arc::new(MockSpeech::default());
        let svc = service(telephony.clone(), speech.clone());

        let err = svc.initiate(command("12345")).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter a valid phone number (e.g., +911234567890 or 1234567890)"
        );
        assert_eq!(speech.request_count(), 0);
        assert_eq!(telephony.placed_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_language_rejected() {
        let svc = service(Arc::new(MockTelephony::default()), Arc::new(MockSpeech::default()));
        let err = svc
            .initiate(TestCallCommand {
                language: Some("fr".to_string()),
                ..command("9876543210")
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unsupported language: fr");
    }

    #[tokio::test]
    async fn test_speech_failure_places_no_call() {
        let telephony = Arc::new(MockTelephony::default());
        let svc = service(
            telephony.clone(),
            Arc::new(MockSpeech::failing("ElevenLabs API key not configured")),
        );

        let err = svc.initiate(command("9876543210")).await.unwrap_err();
        assert!(matches!(err, AppError::VoiceGeneration(_)));
        assert_eq!(
            err.to_string(),
            "Voice generation failed: ElevenLabs API key not configured"
        );
        assert_eq!(telephony.placed_count(), 0);
    }

    #[tokio::test]
    async fn test_skipping_speech_generation() {
        let speech = Arc::new(MockSpeech::failing("should not be called"));
        let svc = service(Arc::new(MockTelephony::default()), speech.clone());

        let outcome = svc
            .initiate(TestCallCommand {
                use_elevenlabs: false,
                ..command("9876543210")
            })
            .await
            .unwrap();
        assert_eq!(outcome.call_sid, "CA0001");
        assert_eq!(speech.request_count(), 0);
    }

    #[tokio::test]
    async fn test_twilio_failure_surfaces_vendor_message() {
        let svc = service(
            Arc::new(MockTelephony::failing("Twilio credentials not configured")),
            Arc::new(MockSpeech::default()),
        );

        let err = svc.initiate(command("9876543210")).await.unwrap_err();
        assert!(matches!(err, AppError::Vendor(_)));
        assert_eq!(err.to_string(), "Twilio credentials not configured");
        assert_eq!(err.status_code().as_u16(), 500);
    }
}
