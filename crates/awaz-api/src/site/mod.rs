//! Marketing site: landing copy, legal text and the HTML pages

pub mod landing;
pub mod legal;
pub mod pages;

pub use landing::LandingPage;
pub use legal::{LegalDocument, PRIVACY_POLICY, TERMS_AND_CONDITIONS};
pub use pages::QuoteState;
