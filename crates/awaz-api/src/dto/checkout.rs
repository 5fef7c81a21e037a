//! Checkout DTOs

use awaz_core::models::order::{is_checkout_country, INDIAN_STATES};
use awaz_core::models::{CheckoutReceipt, OrderDetails, OrderSummary};
use awaz_core::AppError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order plus its sidebar figures, for `GET /api/checkout/order`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub order: OrderDetails,
    pub summary: OrderSummary,
}

impl From<OrderDetails> for OrderView {
    fn from(order: OrderDetails) -> Self {
        Self {
            summary: order.summary(),
            order,
        }
    }
}

/// Billing form submitted from the checkout page
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub order: OrderDetails,

    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,

    #[serde(default)]
    #[validate(length(max = 200, message = "Company name is too long"))]
    pub company: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Street address is required"))]
    pub address: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Postal code is required"))]
    pub postal_code: String,

    #[serde(default = "default_country")]
    pub country: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "State/Province is required"))]
    pub state: String,

    #[serde(default)]
    pub agree_terms: bool,

    #[serde(default)]
    pub agree_marketing: bool,
}

fn default_country() -> String {
    "IN".to_string()
}

impl CheckoutForm {
    /// Checks the field attributes cannot express
    pub fn validate_business_rules(&self) -> Result<(), AppError> {
        if !self.agree_terms {
            return Err(AppError::Validation(
                "You must agree to the Terms of Service and Privacy Policy".to_string(),
            ));
        }

        if !is_checkout_country(&self.country) {
            return Err(AppError::Validation(format!(
                "Unsupported country: {}",
                self.country
            )));
        }

        if self.country == "IN" && !INDIAN_STATES.contains(&self.state.as_str()) {
            return Err(AppError::Validation("Please select a valid state".to_string()));
        }

        Ok(())
    }
}

/// Reply of `POST /api/checkout`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    #[serde(flatten)]
    pub receipt: CheckoutReceipt,
    pub marketing_opt_in: bool,
}
