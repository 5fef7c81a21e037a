//! Contact form DTOs

use awaz_core::models::SupportedLanguage;
use awaz_core::AppError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contact form from the landing page
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Your name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Business name is required"))]
    pub business: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(max = 2000, message = "Message is too long"))]
    pub message: Option<String>,

    /// Lowercase language name, e.g. `hindi`
    #[serde(default)]
    pub preferred_language: Option<String>,

    #[serde(default)]
    pub has_consent: bool,
}

impl ContactRequest {
    pub fn validate_business_rules(&self) -> Result<(), AppError> {
        if !self.has_consent {
            return Err(AppError::Validation(
                "Please confirm you have consent to message your contacts.".to_string(),
            ));
        }

        if let Some(language) = self.preferred_language.as_deref().filter(|l| !l.is_empty()) {
            let known = SupportedLanguage::ALL
                .iter()
                .any(|l| l.name().eq_ignore_ascii_case(language));
            if !known {
                return Err(AppError::Validation(format!(
                    "Unsupported language: {}",
                    language
                )));
            }
        }

        Ok(())
    }
}

/// Reply of `POST /api/contact`
#[derive(Debug, Clone, Serialize)]
pub struct ContactAck {
    pub received: bool,
    pub message: &'static str,
}

impl ContactAck {
    pub fn new() -> Self {
        Self {
            received: true,
            message: "Thank you for your message! We will get back to you soon.",
        }
    }
}

impl Default for ContactAck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(has_consent: bool, language: Option<&str>) -> ContactRequest {
        ContactRequest {
            name: "Sita".to_string(),
            business: "Sita Sweets".to_string(),
            phone: "+977 9812345678".to_string(),
            message: None,
            preferred_language: language.map(str::to_string),
            has_consent,
        }
    }

    #[test]
    fn test_consent_required() {
        let err = request(false, None).validate_business_rules().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please confirm you have consent to message your contacts."
        );
        assert!(request(true, None).validate_business_rules().is_ok());
    }

    #[test]
    fn test_preferred_language() {
        assert!(request(true, Some("nepali")).validate_business_rules().is_ok());
        assert!(request(true, Some("")).validate_business_rules().is_ok());
        assert!(request(true, Some("klingon")).validate_business_rules().is_err());
    }

    #[test]
    fn test_required_fields() {
        let mut req = request(true, None);
        req.business = String::new();
        let err: AppError = req.validate().unwrap_err().into();
        assert_eq!(err.to_string(), "Business name is required");
    }
}
