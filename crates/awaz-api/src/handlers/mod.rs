//! HTTP request handlers

pub mod checkout;
pub mod contact;
pub mod health;
pub mod pages;
pub mod purchase;
pub mod twilio;
pub mod voice;

pub use checkout::configure as configure_checkout;
pub use contact::configure as configure_contact;
pub use health::configure as configure_health;
pub use pages::configure as configure_pages;
pub use pages::configure_content as configure_site_content;
pub use purchase::configure as configure_purchase;
pub use twilio::configure as configure_twilio;
pub use voice::configure as configure_voice;
