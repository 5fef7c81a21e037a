//! Vendor configuration status
//!
//! Reports which vendors have credentials. Nothing is contacted; see
//! `DiagnosticsService` for live checks.

use awaz_core::AppConfig;
use serde::Serialize;

/// Configuration state of one vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VendorStatus {
    pub configured: bool,
    pub status: &'static str,
}

impl VendorStatus {
    fn new(configured: bool, missing: &'static str) -> Self {
        Self {
            configured,
            status: if configured { "ready" } else { missing },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VendorStatuses {
    pub elevenlabs: VendorStatus,
    pub twilio: VendorStatus,
}

/// Whether the demo call can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub services: VendorStatuses,
    pub ready: bool,
}

impl ServiceStatus {
    pub fn from_flags(elevenlabs_configured: bool, twilio_configured: bool) -> Self {
        Self {
            services: VendorStatuses {
                elevenlabs: VendorStatus::new(elevenlabs_configured, "missing_api_key"),
                twilio: VendorStatus::new(twilio_configured, "missing_credentials"),
            },
            ready: elevenlabs_configured && twilio_configured,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::from_flags(
            config.elevenlabs.is_configured(),
            config.twilio.is_configured(),
        )
    }
}
