//! Business logic services for Awaz.ai
//!
//! Every service here is request scoped: it validates input, talks to the
//! vendors through the provider traits and returns a result. Nothing is
//! persisted between requests.
//!
//! # Services
//!
//! - `TestCallService` - Demo call: validate the number, generate speech, place the call
//! - `ConversationService` - Conversational AI calls and their transcripts
//! - `CallLookupService` - Call status by SID
//! - `CallStatusRecorder` - Logs Twilio status callbacks
//! - `DiagnosticsService` - Live connection checks against both vendors
//! - `ServiceStatus` - Which vendors have credentials
//! - `CheckoutService` - Order validation and the stub payment step

pub mod call_lookup;
pub mod call_status;
pub mod checkout;
pub mod conversation;
pub mod diagnostics;
pub mod status;
pub mod test_call;

pub use call_lookup::CallLookupService;
pub use call_status::CallStatusRecorder;
pub use checkout::{CheckoutService, CustomQuote, PackageOffer};
pub use conversation::{ConversationService, StartConversationCommand};
pub use diagnostics::{ConnectionCheck, DiagnosticsReport, DiagnosticsService};
pub use status::{ServiceStatus, VendorStatus, VendorStatuses};
pub use test_call::{TestCallCommand, TestCallOutcome, TestCallService};

#[cfg(test)]
pub(crate) mod mocks;
