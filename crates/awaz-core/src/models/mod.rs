//! Domain models for Awaz.ai
//!
//! Phone numbers, credit pricing, checkout orders, call scripts and the
//! shapes exchanged with the voice vendors.

pub mod call;
pub mod order;
pub mod phone;
pub mod pricing;
pub mod twiml;
pub mod voice;

pub use call::{
    CallDetails, CallScript, CallStatus, CallStatusCallback, ConversationDetails,
    ConversationRequest, ConversationStarted, OutboundCall, PlacedCall, TranscriptTurn,
};
pub use order::{CheckoutReceipt, OrderDetails, OrderQuery, OrderSummary, OrderType};
pub use phone::{Country, PhoneError, PhoneFormat, PhoneNumber};
pub use pricing::{CreditEstimate, CreditPackage, PricingError, UsageRate, CREDIT_PACKAGES};
pub use twiml::{TwimlOptions, VoiceResponse};
pub use voice::{SpeechAudio, SpeechRequest, SupportedLanguage, VoiceInfo, VoiceSettings};
