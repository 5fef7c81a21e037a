//! Unified error handling for Awaz.ai
//!
//! This module provides the error type shared by services and handlers,
//! with automatic HTTP response mapping. Every error body has the shape
//! `{"success": false, "error": <message>, "code": <code>}` which is what
//! the browser pages read.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Main application error type
///
/// All errors in the application should be converted to this type.
/// It implements `ResponseError` for automatic HTTP response generation.
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Validation Errors ====================
    /// User-facing validation message, returned verbatim
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    MissingField(String),

    // ==================== Resource Errors ====================
    #[error("Not found: {0}")]
    NotFound(String),

    // ==================== External Service Errors ====================
    /// A vendor integration lacks credentials
    #[error("{0}")]
    NotConfigured(String),

    #[error("Voice generation failed: {0}")]
    VoiceGeneration(String),

    /// Vendor call failed; message is the vendor's
    #[error("{0}")]
    Vendor(String),

    // ==================== Internal Errors ====================
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            AppError::Validation(_) | AppError::InvalidInput(_) | AppError::MissingField(_) => {
                StatusCode::BAD_REQUEST
            }

            // 404 Not Found
            AppError::NotFound(_) => StatusCode::NOT_FOUND,

            // 503 Service Unavailable
            AppError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::MissingField(_) => "missing_field",
            AppError::NotFound(_) => "not_found",
            AppError::NotConfigured(_) => "not_configured",
            AppError::VoiceGeneration(_) => "voice_generation_failed",
            AppError::Vendor(_) => "vendor_error",
            AppError::Config(_) => "config_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = json!({
            "success": false,
            "error": self.to_string(),
            "code": self.error_code(),
        });

        HttpResponse::build(status).json(body)
    }
}

// ==================== From implementations ====================

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        // Forms show one message at a time
        let message = err
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| err.to_string());
        AppError::Validation(message)
    }
}

impl From<crate::models::PhoneError> for AppError {
    fn from(err: crate::models::PhoneError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<crate::models::PricingError> for AppError {
    fn from(err: crate::models::PricingError) -> Self {
        AppError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::Validation("Phone number is required".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotConfigured("Twilio credentials not configured".to_string()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::VoiceGeneration("quota exceeded".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(config::ConfigError::Message("bad port".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::Validation("Phone number is required".to_string()).to_string(),
            "Phone number is required"
        );
        assert_eq!(
            AppError::VoiceGeneration("quota exceeded".to_string()).to_string(),
            "Voice generation failed: quota exceeded"
        );
    }

    #[actix_web::test]
    async fn test_error_response_body() {
        let response = AppError::Vendor("The number is unverified".to_string()).error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "The number is unverified");
        assert_eq!(body["code"], "vendor_error");
    }
}
