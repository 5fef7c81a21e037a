//! Awaz.ai Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the Awaz.ai website backend. It includes:
//!
//! - Domain models (phone numbers, credit packages, orders, call scripts)
//! - Provider traits for the telephony and speech vendors
//! - Unified error handling with HTTP response mapping
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
