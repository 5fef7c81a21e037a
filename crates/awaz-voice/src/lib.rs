//! Awaz.ai voice vendor clients
//!
//! HTTP clients for the two vendors behind the demo call:
//!
//! - Twilio places the phone call and fetches its script from our webhook
//! - ElevenLabs generates speech and runs conversational AI agents
//!
//! Both implement the provider traits from `awaz-core`, so services never
//! depend on these types directly.
//!
//! # Usage
//!
//! ```rust,ignore
//! let config = AppConfig::load()?;
//! let twilio = TwilioClient::new(&config.twilio, config.public_url())?;
//! let placed = twilio.place_call(&OutboundCall::with_message(to, text, name)).await?;
//! ```

mod elevenlabs;
mod error;
mod twilio;

pub use elevenlabs::ElevenLabsClient;
pub use error::VoiceError;
pub use twilio::TwilioClient;

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Shared HTTP client setup; no request timeout unless one is configured
fn http_client(timeout_ms: Option<u64>) -> Result<Client, VoiceError> {
    let mut builder = ClientBuilder::new().pool_idle_timeout(Duration::from_secs(90));
    if let Some(ms) = timeout_ms {
        builder = builder.timeout(Duration::from_millis(ms));
    }
    builder
        .build()
        .map_err(|e| VoiceError::Connection(e.to_string()))
}
