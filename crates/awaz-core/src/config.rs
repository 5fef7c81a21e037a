//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Configuration is layered from defaults, optional config files, `AWAZ__` prefixed
//! environment variables and finally the vendor's conventional variable names
//! (`TWILIO_ACCOUNT_SID`, `ELEVENLABS_API_KEY`, ...), which always win when set.

use crate::AppResult;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub twilio: TwilioConfig,
    #[serde(default)]
    pub elevenlabs: ElevenLabsConfig,
}

/// HTTP server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Externally reachable base URL, used to build vendor webhook URLs
    #[serde(default = "default_public_url")]
    pub public_url: String,

    /// Comma separated list of allowed CORS origins
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_public_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_cors_origins() -> String {
    "http://localhost:3000,http://127.0.0.1:3000".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Twilio telephony credentials
#[derive(Debug, Deserialize, Clone)]
pub struct TwilioConfig {
    /// Account SID (`AC...`)
    pub account_sid: Option<String>,

    /// Auth token paired with the account SID
    pub auth_token: Option<String>,

    /// Caller ID used for outbound calls
    pub phone_number: Option<String>,

    /// REST API base URL
    #[serde(default = "default_twilio_base_url")]
    pub api_base_url: String,

    /// HTTP timeout in milliseconds; the client default when unset
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_twilio_base_url() -> String {
    "https://api.twilio.com".to_string()
}

impl Default for TwilioConfig {
    fn default() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            phone_number: None,
            api_base_url: default_twilio_base_url(),
            timeout_ms: None,
        }
    }
}

impl TwilioConfig {
    /// Account SID, auth token and caller number are all present
    pub fn is_configured(&self) -> bool {
        is_set(&self.account_sid) && is_set(&self.auth_token) && is_set(&self.phone_number)
    }
}

/// ElevenLabs speech and conversational AI settings
#[derive(Debug, Deserialize, Clone)]
pub struct ElevenLabsConfig {
    /// API key sent as `xi-api-key`
    pub api_key: Option<String>,

    /// Default conversational agent
    pub agent_id: Option<String>,

    /// Voice used for English speech
    pub voice_id: Option<String>,

    /// Phone number id the agent calls from
    pub phone_number_id: Option<String>,

    /// Text to speech model
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// REST API base URL
    #[serde(default = "default_elevenlabs_base_url")]
    pub api_base_url: String,

    /// HTTP timeout in milliseconds; the client default when unset
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_model_id() -> String {
    "eleven_multilingual_v2".to_string()
}

fn default_elevenlabs_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            agent_id: None,
            voice_id: None,
            phone_number_id: None,
            model_id: default_model_id(),
            api_base_url: default_elevenlabs_base_url(),
            timeout_ms: None,
        }
    }
}

impl ElevenLabsConfig {
    /// The API key is present
    pub fn is_configured(&self) -> bool {
        is_set(&self.api_key)
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// Reads a variable, treating empty values as unset
fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    /// Load configuration from environment and optional config file
    ///
    /// Unreadable files and values of the wrong type fail with `AppError::Config`.
    pub fn load() -> AppResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let public_url = env_opt("PUBLIC_URL").or_else(|| env_opt("NEXTAUTH_URL"));
        let port = env_opt("PORT").and_then(|p| p.parse::<i64>().ok());

        let config = Config::builder()
            // Start with default values
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("server.workers", num_cpus::get() as i64)?
            .set_default("server.public_url", default_public_url())?
            .set_default("server.cors_origins", default_cors_origins())?
            .set_default("server.timeout_secs", 30)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with AWAZ_ prefix
            .add_source(
                Environment::with_prefix("AWAZ")
                    .separator("__")
                    .try_parsing(true),
            )
            // Vendor conventional variable names
            .set_override_option("server.host", env_opt("HOST"))?
            .set_override_option("server.port", port)?
            .set_override_option("server.public_url", public_url)?
            .set_override_option("server.cors_origins", env_opt("CORS_ORIGINS"))?
            .set_override_option("twilio.account_sid", env_opt("TWILIO_ACCOUNT_SID"))?
            .set_override_option("twilio.auth_token", env_opt("TWILIO_AUTH_TOKEN"))?
            .set_override_option("twilio.phone_number", env_opt("TWILIO_PHONE_NUMBER"))?
            .set_override_option("elevenlabs.api_key", env_opt("ELEVENLABS_API_KEY"))?
            .set_override_option("elevenlabs.agent_id", env_opt("ELEVENLABS_AGENT_ID"))?
            .set_override_option("elevenlabs.voice_id", env_opt("ELEVENLABS_VOICE_ID"))?
            .set_override_option(
                "elevenlabs.phone_number_id",
                env_opt("ELEVENLABS_PHONE_NUMBER_ID"),
            )?
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Get the server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Public base URL without a trailing slash
    pub fn public_url(&self) -> &str {
        self.server.public_url.trim_end_matches('/')
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            public_url: default_public_url(),
            cors_origins: default_cors_origins(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            twilio: TwilioConfig::default(),
            elevenlabs: ElevenLabsConfig::default(),
        }
    }
}
