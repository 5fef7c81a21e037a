//! TwiML voice documents
//!
//! Twilio fetches the call script from our webhook when the callee answers.
//! Only the handful of verbs the demo call needs are modelled.

use serde::Deserialize;

/// Voice used for Twilio's built-in text to speech
pub const DEFAULT_SAY_VOICE: &str = "alice";

/// Name used when the caller did not give one
pub const DEFAULT_NAME: &str = "Friend";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Verb {
    Say { voice: String, text: String },
    Play { url: String },
    Pause { length: u32 },
}

/// Builder for a `<Response>` document
#[derive(Debug, Clone, Default)]
pub struct VoiceResponse {
    verbs: Vec<Verb>,
}

impl VoiceResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Speak text with Twilio's text to speech
    pub fn say(mut self, voice: &str, text: impl Into<String>) -> Self {
        self.verbs.push(Verb::Say {
            voice: voice.to_string(),
            text: text.into(),
        });
        self
    }

    /// Play an audio file
    pub fn play(mut self, url: impl Into<String>) -> Self {
        self.verbs.push(Verb::Play { url: url.into() });
        self
    }

    /// Silence for `length` seconds
    pub fn pause(mut self, length: u32) -> Self {
        self.verbs.push(Verb::Pause { length });
        self
    }

    /// Serialize to the XML Twilio expects
    pub fn render(&self) -> String {
        let mut xml = String::from(XML_DECLARATION);
        xml.push_str("<Response>");

        for verb in &self.verbs {
            match verb {
                Verb::Say { voice, text } => {
                    xml.push_str(&format!(
                        r#"<Say voice="{}">{}</Say>"#,
                        escape_xml(voice),
                        escape_xml(text)
                    ));
                }
                Verb::Play { url } => {
                    xml.push_str(&format!("<Play>{}</Play>", escape_xml(url)));
                }
                Verb::Pause { length } => {
                    xml.push_str(&format!(r#"<Pause length="{}"/>"#, length));
                }
            }
        }

        xml.push_str("</Response>");
        xml
    }
}

/// Inputs of the demo call script, as received on the webhook query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TwimlOptions {
    pub message: Option<String>,
    #[serde(rename = "audioUrl")]
    pub audio_url: Option<String>,
    pub name: Option<String>,
}

/// Build the demo call script.
///
/// Pre-generated audio wins over a message; with neither, a default greeting
/// is spoken. Every script ends with a short pause and a goodbye.
pub fn render_call_script(options: &TwimlOptions) -> String {
    let name = non_empty(options.name.as_deref()).unwrap_or(DEFAULT_NAME);

    let response = if let Some(url) = non_empty(options.audio_url.as_deref()) {
        VoiceResponse::new().play(url)
    } else if let Some(message) = non_empty(options.message.as_deref()) {
        VoiceResponse::new().say(DEFAULT_SAY_VOICE, personalize(message, name))
    } else {
        VoiceResponse::new().say(
            DEFAULT_SAY_VOICE,
            format!(
                "Hello {}! This is a test call from Awaz.ai. Thank you for testing our voice platform.",
                name
            ),
        )
    };

    response
        .pause(1)
        .say(DEFAULT_SAY_VOICE, "Goodbye!")
        .render()
}

/// Fallback script when the webhook itself fails
pub fn error_response() -> String {
    VoiceResponse::new()
        .say(
            DEFAULT_SAY_VOICE,
            "Sorry, there was an error processing your call.",
        )
        .render()
}

/// Replace every `{{name}}` placeholder
pub fn personalize(message: &str, name: &str) -> String {
    message.replace("{{name}}", name)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Escape text for element content and attribute values
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
