//! Purchase funnel orders
//!
//! An order only ever lives in the checkout URL: the purchase page encodes
//! it into query parameters and the checkout page decodes it again. Nothing
//! is persisted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::pricing::{self, CreditEstimate, CreditPackage, PricingError};

/// How the order was composed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Package,
    Custom,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Package => "package",
            OrderType::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "package" => Some(OrderType::Package),
            "custom" => Some(OrderType::Custom),
            _ => None,
        }
    }
}

/// Raw checkout query string, as the purchase page writes it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderQuery {
    #[serde(rename = "type")]
    pub order_type: Option<String>,
    #[serde(rename = "packageId")]
    pub package_id: Option<String>,
    pub credits: Option<String>,
    pub price: Option<String>,
}

/// Order carried from the purchase page to checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub order_type: OrderType,
    pub package_id: String,
    pub credits: u64,
    pub price: Decimal,
}

impl OrderDetails {
    /// Order for one of the catalog packages
    pub fn for_package(package: &CreditPackage) -> Self {
        Self {
            order_type: OrderType::Package,
            package_id: package.id.to_string(),
            credits: package.credits,
            price: package.price,
        }
    }

    /// Order for a custom quantity at the per-credit rate
    pub fn custom(credits: u64) -> Result<Self, PricingError> {
        Ok(Self {
            order_type: OrderType::Custom,
            package_id: "custom".to_string(),
            credits,
            price: pricing::custom_price(credits)?,
        })
    }

    /// Decode an order from the checkout query string.
    ///
    /// `credits` and `price` are required; without both there is no order.
    pub fn from_query(query: &OrderQuery) -> Option<Self> {
        let credits = query.credits.as_deref()?.trim().parse::<u64>().ok()?;
        let price = Decimal::from_str(query.price.as_deref()?.trim()).ok()?;

        if credits == 0 || price < Decimal::ZERO {
            return None;
        }

        let package_id = query
            .package_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| "custom".to_string());

        let order_type = query
            .order_type
            .as_deref()
            .and_then(OrderType::parse)
            .unwrap_or(if package_id == "custom" {
                OrderType::Custom
            } else {
                OrderType::Package
            });

        Some(Self {
            order_type,
            package_id,
            credits,
            price,
        })
    }

    /// Relative checkout URL carrying this order
    pub fn checkout_link(&self) -> String {
        format!(
            "/checkout?type={}&packageId={}&credits={}&price={}",
            self.order_type.as_str(),
            urlencoding::encode(&self.package_id),
            self.credits,
            self.price.normalize()
        )
    }

    /// Figures shown in the checkout sidebar
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            credits: self.credits,
            price: pricing::round_money(self.price),
            price_per_credit: pricing::price_per_credit(self.price, self.credits)
                .unwrap_or(Decimal::ZERO),
            estimate: CreditEstimate::for_credits(self.credits),
            total_display: pricing::format_usd(self.price),
        }
    }
}

/// Checkout sidebar figures
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub credits: u64,
    pub price: Decimal,
    pub price_per_credit: Decimal,
    pub estimate: CreditEstimate,
    pub total_display: String,
}

/// Outcome of the stub payment step
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub order_reference: Uuid,
    pub status: &'static str,
    pub message: &'static str,
    pub order: OrderDetails,
    pub submitted_at: DateTime<Utc>,
}

impl CheckoutReceipt {
    /// Receipt for an order awaiting payment
    pub fn pending(order: OrderDetails) -> Self {
        Self {
            order_reference: Uuid::new_v4(),
            status: "payment_pending",
            message: "Payment processing would happen here!",
            order,
            submitted_at: Utc::now(),
        }
    }
}

/// Billing countries offered at checkout
pub const CHECKOUT_COUNTRIES: [(&str, &str); 6] = [
    ("IN", "India"),
    ("NP", "Nepal"),
    ("US", "United States"),
    ("GB", "United Kingdom"),
    ("CA", "Canada"),
    ("AU", "Australia"),
];

/// Whether a checkout country code is offered
pub fn is_checkout_country(code: &str) -> bool {
    CHECKOUT_COUNTRIES.iter().any(|(c, _)| *c == code)
}

/// States listed when the billing country is India
pub const INDIAN_STATES: [&str; 28] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pricing::find_package;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_type_parse() {
        assert_eq!(OrderType::parse(" Package "), Some(OrderType::Package));
        assert_eq!(OrderType::parse("custom"), Some(OrderType::Custom));
        assert_eq!(OrderType::parse("bundle"), None);
        assert_eq!(OrderType::Custom.as_str(), "custom");
    }

    fn query(order_type: &str, package_id: &str, credits: &str, price: &str) -> OrderQuery {
        OrderQuery {
            order_type: Some(order_type.to_string()),
            package_id: Some(package_id.to_string()),
            credits: Some(credits.to_string()),
            price: Some(price.to_string()),
        }
    }

    #[test]
    fn test_package_order_link() {
        let order = OrderDetails::for_package(find_package("starter").unwrap());
        assert_eq!(
            order.checkout_link(),
            "/checkout?type=package&packageId=starter&credits=1000&price=12"
        );
    }

    #[test]
    fn test_custom_order_link() {
        let order = OrderDetails::custom(2_500).unwrap();
        assert_eq!(order.price, dec!(25.00));
        assert_eq!(
            order.checkout_link(),
            "/checkout?type=custom&packageId=custom&credits=2500&price=25"
        );
        assert!(OrderDetails::custom(50).is_err());
    }

    #[test]
    fn test_from_query() {
        let order = OrderDetails::from_query(&query("package", "growth", "5000", "50")).unwrap();
        assert_eq!(order.order_type, OrderType::Package);
        assert_eq!(order.package_id, "growth");
        assert_eq!(order.credits, 5_000);
        assert_eq!(order.price, dec!(50));

        let order = OrderDetails::from_query(&query("custom", "custom", "250", "2.5")).unwrap();
        assert_eq!(order.order_type, OrderType::Custom);
        assert_eq!(order.price, dec!(2.50));
    }

    #[test]
    fn test_from_query_requires_credits_and_price() {
        assert!(OrderDetails::from_query(&OrderQuery::default()).is_none());

        let mut q = query("package", "growth", "5000", "50");
        q.price = None;
        assert!(OrderDetails::from_query(&q).is_none());

        assert!(OrderDetails::from_query(&query("package", "growth", "lots", "50")).is_none());
        assert!(OrderDetails::from_query(&query("package", "growth", "0", "50")).is_none());
    }

    #[test]
    fn test_summary() {
        let order = OrderDetails::for_package(find_package("business").unwrap());
        let summary = order.summary();
        assert_eq!(summary.price_per_credit, dec!(0.008));
        assert_eq!(summary.estimate.minutes, 18_750);
        assert_eq!(summary.total_display, "$120.00");
    }

    #[test]
    fn test_receipt_is_pending() {
        let receipt = CheckoutReceipt::pending(OrderDetails::custom(100).unwrap());
        assert_eq!(receipt.status, "payment_pending");
        assert_eq!(receipt.order.credits, 100);
    }

    #[test]
    fn test_checkout_countries() {
        assert!(is_checkout_country("IN"));
        assert!(is_checkout_country("AU"));
        assert!(!is_checkout_country("FR"));
        assert_eq!(INDIAN_STATES.len(), 28);
    }
}
