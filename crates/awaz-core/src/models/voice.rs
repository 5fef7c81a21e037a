//! Speech generation types

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Voice used when nothing more specific is configured ("Adam")
pub const DEFAULT_VOICE_ID: &str = "pNInz6obpgDQGcFmaJgB";

/// Bytes of generated audio per second, for the rough duration estimate
const AUDIO_BYTES_PER_SECOND: usize = 16_000;

/// Languages the demo call can be placed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    #[default]
    En,
    Hi,
    Bn,
    Mr,
    Ta,
    Te,
    Kn,
    Ne,
}

impl SupportedLanguage {
    pub const ALL: [SupportedLanguage; 8] = [
        SupportedLanguage::En,
        SupportedLanguage::Hi,
        SupportedLanguage::Bn,
        SupportedLanguage::Mr,
        SupportedLanguage::Ta,
        SupportedLanguage::Te,
        SupportedLanguage::Kn,
        SupportedLanguage::Ne,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SupportedLanguage::En => "en",
            SupportedLanguage::Hi => "hi",
            SupportedLanguage::Bn => "bn",
            SupportedLanguage::Mr => "mr",
            SupportedLanguage::Ta => "ta",
            SupportedLanguage::Te => "te",
            SupportedLanguage::Kn => "kn",
            SupportedLanguage::Ne => "ne",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SupportedLanguage::En => "English",
            SupportedLanguage::Hi => "Hindi",
            SupportedLanguage::Bn => "Bengali",
            SupportedLanguage::Mr => "Marathi",
            SupportedLanguage::Ta => "Tamil",
            SupportedLanguage::Te => "Telugu",
            SupportedLanguage::Kn => "Kannada",
            SupportedLanguage::Ne => "Nepali",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Voice for this language.
    ///
    /// English honours the configured voice; the other languages share the
    /// default voice until dedicated ones are set up.
    pub fn voice_id<'a>(&self, configured_english_voice: Option<&'a str>) -> &'a str {
        match (self, configured_english_voice) {
            (SupportedLanguage::En, Some(voice)) if !voice.trim().is_empty() => voice,
            _ => DEFAULT_VOICE_ID,
        }
    }
}

/// Text to speech tuning sent with every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.0,
            use_speaker_boost: true,
        }
    }
}

/// A text to speech job
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub text: String,
    pub language: SupportedLanguage,
    /// Overrides the language's voice
    pub voice_id: Option<String>,
    pub settings: VoiceSettings,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>, language: SupportedLanguage) -> Self {
        Self {
            text: text.into(),
            language,
            voice_id: None,
            settings: VoiceSettings::default(),
        }
    }

    /// Short prefix of the text for log lines
    pub fn preview(&self) -> String {
        self.text.chars().take(50).collect()
    }
}

/// Generated audio
#[derive(Debug, Clone)]
pub struct SpeechAudio {
    pub bytes: Vec<u8>,
}

impl SpeechAudio {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// Rough duration in whole seconds, rounded up
    pub fn estimated_duration_secs(&self) -> u64 {
        self.bytes.len().div_ceil(AUDIO_BYTES_PER_SECOND) as u64
    }
}

/// A voice available on the speech vendor account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub voice_id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub preview_url: Option<String>,
}

/// Greeting spoken on a demo call
pub fn test_message(name: &str) -> String {
    format!(
        "Hello {}! This is a test call from Awaz.ai, your multilingual voice outreach platform. \
         We're testing our voice quality and call delivery system. Thank you for helping us make \
         communication better for small businesses across India and Nepal. Have a great day!",
        name
    )
}

/// Dynamic variables for a demo conversational call
pub fn demo_variables(customer_name: Option<&str>, business_name: Option<&str>) -> BTreeMap<String, String> {
    let customer = customer_name.filter(|v| !v.trim().is_empty()).unwrap_or("Friend");
    let business = business_name.filter(|v| !v.trim().is_empty()).unwrap_or("Awaz.ai");

    BTreeMap::from([
        ("business_name".to_string(), business.to_string()),
        ("customer_name".to_string(), customer.to_string()),
        (
            "call_purpose".to_string(),
            "Testing our new AI voice platform".to_string(),
        ),
        ("topic".to_string(), "voice outreach services".to_string()),
        ("amount".to_string(), "₹999".to_string()),
        ("due_date".to_string(), "tomorrow".to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(SupportedLanguage::from_code("HI"), Some(SupportedLanguage::Hi));
        assert_eq!(SupportedLanguage::from_code("fr"), None);
        assert_eq!(SupportedLanguage::Ne.name(), "Nepali");
        assert_eq!(SupportedLanguage::default(), SupportedLanguage::En);

        let lang: SupportedLanguage = serde_json::from_str("\"ta\"").unwrap();
        assert_eq!(lang, SupportedLanguage::Ta);
        assert!(serde_json::from_str::<SupportedLanguage>("\"xx\"").is_err());
    }

    #[test]
    fn test_voice_selection() {
        assert_eq!(SupportedLanguage::En.voice_id(Some("custom-voice")), "custom-voice");
        assert_eq!(SupportedLanguage::En.voice_id(None), DEFAULT_VOICE_ID);
        assert_eq!(SupportedLanguage::Hi.voice_id(Some("custom-voice")), DEFAULT_VOICE_ID);
    }

    #[test]
    fn test_audio_estimates() {
        let audio = SpeechAudio::new(vec![0u8; 32_001]);
        assert_eq!(audio.estimated_duration_secs(), 3);
        assert_eq!(SpeechAudio::new(vec![1, 2, 3]).to_base64(), "AQID");
        assert_eq!(SpeechAudio::new(Vec::new()).estimated_duration_secs(), 0);
    }

    #[test]
    fn test_message_contains_name() {
        let message = test_message("Meera");
        assert!(message.starts_with("Hello Meera! This is a test call from Awaz.ai"));
        assert!(message.ends_with("Have a great day!"));
    }

    #[test]
    fn test_demo_variables_defaults() {
        let vars = demo_variables(None, Some(""));
        assert_eq!(vars["customer_name"], "Friend");
        assert_eq!(vars["business_name"], "Awaz.ai");
        assert_eq!(vars["amount"], "₹999");
        assert_eq!(vars.len(), 6);
    }
}
