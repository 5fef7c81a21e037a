//! Vendor client errors

use awaz_core::AppError;
use thiserror::Error;

/// Errors from the Twilio and ElevenLabs clients
#[derive(Debug, Error)]
pub enum VoiceError {
    /// Credentials or ids missing; message is shown to the caller as is
    #[error("{0}")]
    NotConfigured(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout: request took longer than {0}ms")]
    Timeout(u64),

    /// Non-2xx reply; message is the vendor's own when it sent one
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl VoiceError {
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout_ms: Option<u64>) -> Self {
        match timeout_ms {
            Some(ms) if err.is_timeout() => VoiceError::Timeout(ms),
            _ => VoiceError::Connection(err.to_string()),
        }
    }
}

impl From<VoiceError> for AppError {
    fn from(err: VoiceError) -> Self {
        match err {
            VoiceError::NotConfigured(msg) => AppError::NotConfigured(msg),
            VoiceError::Api { status: 404, message } => AppError::NotFound(message),
            other => AppError::Vendor(other.to_string()),
        }
    }
}
