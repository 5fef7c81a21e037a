//! Purchase funnel DTOs

use awaz_core::models::pricing::{UsageRate, MIN_CUSTOM_CREDITS, PRICE_PER_CREDIT, USAGE_RATES};
use awaz_core::AppError;
use awaz_services::checkout::PackageOffer;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Query of `GET /api/purchase/quote`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteQuery {
    pub credits: Option<String>,
}

impl QuoteQuery {
    /// Requested credits as a whole number
    pub fn credits(&self) -> Result<u64, AppError> {
        let raw = self
            .credits
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::MissingField("Credits are required".to_string()))?;

        raw.parse::<u64>()
            .map_err(|_| AppError::InvalidInput("credits must be a whole number".to_string()))
    }
}

/// Reply of `GET /api/purchase/packages`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageCatalog {
    pub packages: Vec<PackageOffer>,
    pub price_per_credit: Decimal,
    pub min_custom_credits: u64,
    pub usage_rates: &'static [UsageRate],
}

impl PackageCatalog {
    pub fn new(packages: Vec<PackageOffer>) -> Self {
        Self {
            packages,
            price_per_credit: PRICE_PER_CREDIT,
            min_custom_credits: MIN_CUSTOM_CREDITS,
            usage_rates: &USAGE_RATES,
        }
    }
}
