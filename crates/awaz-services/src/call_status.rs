//! Twilio status callbacks
//!
//! Callbacks are only logged. There is no call record to update and the
//! order in which Twilio delivers them is not checked.

use awaz_core::models::{CallStatus, CallStatusCallback};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct CallStatusRecorder;

impl CallStatusRecorder {
    pub fn new() -> Self {
        Self
    }

    /// Log one callback and return the status it carried
    #[instrument(skip(self, callback), fields(call_sid = %callback.sid()))]
    pub fn record(&self, callback: &CallStatusCallback) -> CallStatus {
        let sid = callback.sid();
        let status = callback.status();

        info!(
            call_status = ?callback.call_status,
            duration = ?callback.call_duration,
            to = ?callback.to,
            from = ?callback.from,
            timestamp = ?callback.timestamp,
            final_status = status.is_final(),
            "Twilio call status webhook"
        );
        match &status {
            CallStatus::Initiated => info!("Call {} has been initiated", sid),
            CallStatus::Ringing => info!("Call {} is ringing", sid),
            CallStatus::Answered => info!("Call {} was answered", sid),
            CallStatus::Completed => info!(
                "Call {} completed after {} seconds",
                sid,
                callback.call_duration.as_deref().unwrap_or("0")
            ),
            CallStatus::Failed => warn!("Call {} failed", sid),
            CallStatus::Busy => info!("Call {} encountered busy signal", sid),
            CallStatus::NoAnswer => info!("Call {} was not answered", sid),
            other => info!("Call {} status: {}", sid, other),
        }

        status
    }
}
