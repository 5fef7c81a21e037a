//! Twilio REST client
//!
//! Talks to the 2010-04-01 API with HTTP basic auth and form-encoded bodies.
//! Only the call resource and the account lookup are used.

use async_trait::async_trait;
use awaz_core::config::TwilioConfig;
use awaz_core::models::call::{status_callback_url, STATUS_CALLBACK_EVENTS};
use awaz_core::models::{CallDetails, CallStatus, OutboundCall, PlacedCall};
use awaz_core::traits::TelephonyProvider;
use awaz_core::AppError;
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

use crate::error::VoiceError;

const API_VERSION: &str = "2010-04-01";
const NOT_CONFIGURED: &str = "Twilio credentials not configured";

/// Client for Twilio's call API
pub struct TwilioClient {
    http_client: Client,
    base_url: String,
    account_sid: Option<String>,
    auth_token: Option<String>,
    phone_number: Option<String>,
    public_url: String,
    timeout_ms: Option<u64>,
}

impl TwilioClient {
    /// Create a client.
    ///
    /// Missing credentials are not an error here; every request checks them
    /// and fails with "Twilio credentials not configured".
    ///
    /// # Arguments
    ///
    /// * `config` - Twilio section of the app config
    /// * `public_url` - Base URL Twilio uses to reach our webhooks
    pub fn new(config: &TwilioConfig, public_url: &str) -> Result<Self, VoiceError> {
        let http_client = crate::http_client(config.timeout_ms)?;

        Ok(Self {
            http_client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            account_sid: non_blank(&config.account_sid),
            auth_token: non_blank(&config.auth_token),
            phone_number: non_blank(&config.phone_number),
            public_url: public_url.trim_end_matches('/').to_string(),
            timeout_ms: config.timeout_ms,
        })
    }

    fn credentials(&self) -> Result<(&str, &str), VoiceError> {
        match (self.account_sid.as_deref(), self.auth_token.as_deref()) {
            (Some(sid), Some(token)) => Ok((sid, token)),
            _ => Err(VoiceError::NotConfigured(NOT_CONFIGURED.to_string())),
        }
    }

    fn account_url(&self, account_sid: &str) -> String {
        format!(
            "{}/{}/Accounts/{}",
            self.base_url,
            API_VERSION,
            urlencoding::encode(account_sid)
        )
    }

    /// Form fields of a create-call request
    fn call_form(&self, call: &OutboundCall, from: &str) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("To", call.to.clone()),
            ("From", from.to_string()),
            ("Url", call.voice_response_url(&self.public_url)),
            ("Method", "POST".to_string()),
            ("StatusCallback", status_callback_url(&self.public_url)),
            ("StatusCallbackMethod", "POST".to_string()),
        ];
        form.extend(
            STATUS_CALLBACK_EVENTS
                .iter()
                .map(|event| ("StatusCallbackEvent", event.to_string())),
        );
        form
    }

    /// Send a request and decode the JSON reply
    async fn execute<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R, VoiceError> {
        let response = request
            .send()
            .await
            .map_err(|e| VoiceError::from_reqwest(e, self.timeout_ms))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            VoiceError::Parse(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            let message = api_error_message(&body)
                .unwrap_or_else(|| format!("Twilio request failed with status {}", status.as_u16()));
            error!("Twilio API error: status={}, message={}", status, message);
            return Err(VoiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Twilio response: {}", body);

        serde_json::from_str(&body)
            .map_err(|e| VoiceError::Parse(format!("Failed to parse JSON: {}", e)))
    }

    #[instrument(skip(self, call), fields(to = %call.to))]
    async fn create_call(&self, call: &OutboundCall) -> Result<PlacedCall, VoiceError> {
        let (sid, token) = self.credentials()?;
        let from = self
            .phone_number
            .as_deref()
            .ok_or_else(|| VoiceError::NotConfigured(NOT_CONFIGURED.to_string()))?;

        info!("Making call to: {}", call.to);

        let request = self
            .http_client
            .post(format!("{}/Calls.json", self.account_url(sid)))
            .basic_auth(sid, Some(token))
            .form(&self.call_form(call, from));

        let reply: TwilioCall = self.execute(request).await?;

        info!("Call initiated successfully: {}", reply.sid);

        Ok(PlacedCall {
            sid: reply.sid,
            status: CallStatus::parse(&reply.status),
        })
    }

    #[instrument(skip(self))]
    async fn get_call(&self, call_sid: &str) -> Result<CallDetails, VoiceError> {
        let (sid, token) = self.credentials()?;

        let request = self
            .http_client
            .get(format!(
                "{}/Calls/{}.json",
                self.account_url(sid),
                urlencoding::encode(call_sid)
            ))
            .basic_auth(sid, Some(token));

        let reply: TwilioCall = self.execute(request).await?;
        Ok(reply.into_details())
    }

    #[instrument(skip(self))]
    async fn get_account(&self) -> Result<(), VoiceError> {
        let (sid, token) = self.credentials()?;

        let request = self
            .http_client
            .get(format!("{}.json", self.account_url(sid)))
            .basic_auth(sid, Some(token));

        let _account: serde_json::Value = self.execute(request).await?;
        Ok(())
    }
}

#[async_trait]
impl TelephonyProvider for TwilioClient {
    fn is_configured(&self) -> bool {
        self.account_sid.is_some() && self.auth_token.is_some() && self.phone_number.is_some()
    }

    fn caller_id(&self) -> Option<String> {
        self.phone_number.clone()
    }

    async fn place_call(&self, call: &OutboundCall) -> Result<PlacedCall, AppError> {
        Ok(self.create_call(call).await?)
    }

    async fn fetch_call(&self, sid: &str) -> Result<CallDetails, AppError> {
        Ok(self.get_call(sid).await?)
    }

    async fn verify_account(&self) -> Result<(), AppError> {
        Ok(self.get_account().await?)
    }
}

/// Call resource as Twilio returns it
#[derive(Debug, Deserialize)]
struct TwilioCall {
    sid: String,
    status: String,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    price: Option<String>,
    #[serde(default)]
    direction: Option<String>,
    #[serde(default)]
    start_time: Option<String>,
    #[serde(default)]
    end_time: Option<String>,
}

impl TwilioCall {
    fn into_details(self) -> CallDetails {
        CallDetails {
            status: CallStatus::parse(&self.status),
            start_time: parse_timestamp(self.start_time.as_deref()),
            end_time: parse_timestamp(self.end_time.as_deref()),
            sid: self.sid,
            duration: self.duration,
            price: self.price,
            direction: self.direction,
        }
    }
}

/// Twilio timestamps are RFC 2822 (`Tue, 31 Aug 2010 20:36:28 +0000`)
fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(value?)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[derive(Debug, Deserialize)]
struct TwilioErrorBody {
    message: Option<String>,
}

fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<TwilioErrorBody>(body)
        .ok()?
        .message
        .filter(|m| !m.is_empty())
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
