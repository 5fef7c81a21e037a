//! Demo call and voice DTOs

use awaz_core::models::Country;
use awaz_services::{ServiceStatus, StartConversationCommand, TestCallCommand, VendorStatuses};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `POST /api/voice/test-call`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCallRequest {
    pub phone_number: Option<String>,
    pub name: Option<String>,
    pub language: Option<String>,
    /// Defaults to true
    pub use_eleven_labs: Option<bool>,
}

impl From<TestCallRequest> for TestCallCommand {
    fn from(req: TestCallRequest) -> Self {
        Self {
            phone_number: req.phone_number,
            name: req.name,
            language: req.language,
            use_elevenlabs: req.use_eleven_labs.unwrap_or(true),
        }
    }
}

/// Reply of `GET /api/voice/test-call`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatusResponse {
    pub success: bool,
    pub services: VendorStatuses,
    pub ready: bool,
}

impl From<ServiceStatus> for ServiceStatusResponse {
    fn from(status: ServiceStatus) -> Self {
        Self {
            success: true,
            services: status.services,
            ready: status.ready,
        }
    }
}

/// Query of `GET /test-call`, as the landing hero form submits it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestCallPrefill {
    /// `IN`, `NP` or `OTHER`; India when absent
    pub country: Option<String>,
    pub phone: Option<String>,
    pub name: Option<String>,
}

impl TestCallPrefill {
    /// Number joined with the selected dial code
    pub fn phone_number(&self) -> Option<String> {
        let phone = self.phone.as_deref().map(str::trim).filter(|p| !p.is_empty())?;
        let country = self
            .country
            .as_deref()
            .and_then(Country::from_code)
            .unwrap_or(Country::India);
        Some(country.compose(phone))
    }
}

/// Body of `POST /api/voice/conversation`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationCallRequest {
    pub phone_number: Option<String>,
    pub agent_id: Option<String>,
    pub customer_name: Option<String>,
    pub business_name: Option<String>,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

impl From<ConversationCallRequest> for StartConversationCommand {
    fn from(req: ConversationCallRequest) -> Self {
        Self {
            phone_number: req.phone_number,
            agent_id: req.agent_id,
            customer_name: req.customer_name,
            business_name: req.business_name,
            variables: req.variables,
        }
    }
}
