//! Call status lookup

use awaz_core::models::CallDetails;
use awaz_core::traits::TelephonyProvider;
use awaz_core::{AppError, AppResult};
use std::sync::Arc;
use tracing::instrument;

pub struct CallLookupService {
    telephony: Arc<dyn TelephonyProvider>,
}

impl CallLookupService {
    pub fn new(telephony: Arc<dyn TelephonyProvider>) -> Self {
        Self { telephony }
    }

    /// Current state of a call Twilio placed
    #[instrument(skip(self))]
    pub async fn status(&self, call_sid: &str) -> AppResult<CallDetails> {
        let call_sid = call_sid.trim();
        if call_sid.is_empty() {
            return Err(AppError::Validation("Call SID is required".to_string()));
        }

        self.telephony.fetch_call(call_sid).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockTelephony;
    use awaz_core::models::CallStatus;

    #[tokio::test]
    async fn test_status() {
        let svc = CallLookupService::new(Arc::new(MockTelephony::default()));
        let details = svc.status("CA42").await.unwrap();
        assert_eq!(details.sid, "CA42");
        assert_eq!(details.status, CallStatus::Completed);
    }

    #[tokio::test]
    async fn test_blank_sid() {
        let svc = CallLookupService::new(Arc::new(MockTelephony::default()));
        let err = svc.status(" ").await.unwrap_err();
        assert_eq!(err.to_string(), "Call SID is required");
    }

    #[tokio::test]
    async fn test_vendor_error_passes_through() {
        let svc = CallLookupService::new(Arc::new(MockTelephony::failing("Authenticate")));
        let err = svc.status("CA42").await.unwrap_err();
        assert!(matches!(err, AppError::Vendor(_)));
    }
}
