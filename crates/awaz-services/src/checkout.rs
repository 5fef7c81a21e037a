//! Purchase funnel: package offers, custom quotes and the stub checkout
//!
//! Orders travel in the checkout URL, so a submitted order is re-checked
//! against the price list before a receipt is issued.

use awaz_core::models::pricing::{self, find_package, CREDIT_PACKAGES};
use awaz_core::models::{
    CheckoutReceipt, CreditEstimate, CreditPackage, OrderDetails, OrderQuery, OrderSummary,
    OrderType,
};
use awaz_core::{AppError, AppResult};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// A catalog package with its derived figures
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageOffer {
    #[serde(flatten)]
    pub package: &'static CreditPackage,
    pub price_per_credit: rust_decimal::Decimal,
    pub estimate: CreditEstimate,
    pub checkout_link: String,
}

/// Price of a custom credit quantity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomQuote {
    pub order: OrderDetails,
    pub summary: OrderSummary,
    pub checkout_link: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckoutService;

impl CheckoutService {
    pub fn new() -> Self {
        Self
    }

    /// The fixed package catalog
    pub fn packages(&self) -> Vec<PackageOffer> {
        CREDIT_PACKAGES
            .iter()
            .map(|package| {
                let order = OrderDetails::for_package(package);
                let summary = order.summary();
                PackageOffer {
                    package,
                    price_per_credit: summary.price_per_credit,
                    estimate: summary.estimate,
                    checkout_link: order.checkout_link(),
                }
            })
            .collect()
    }

    /// Quote a custom quantity
    #[instrument(skip(self))]
    pub fn quote(&self, credits: u64) -> AppResult<CustomQuote> {
        let order = OrderDetails::custom(credits)?;
        Ok(CustomQuote {
            summary: order.summary(),
            checkout_link: order.checkout_link(),
            order,
        })
    }

    /// Decode the order carried by the checkout URL
    pub fn order_from_query(&self, query: &OrderQuery) -> AppResult<OrderDetails> {
        OrderDetails::from_query(query).ok_or_else(|| AppError::NotFound("Invalid Order".to_string()))
    }

    /// Accept a checkout submission.
    ///
    /// No payment is taken; the receipt only acknowledges the order.
    #[instrument(skip(self, order), fields(package = %order.package_id, credits = order.credits))]
    pub fn submit(&self, order: OrderDetails) -> AppResult<CheckoutReceipt> {
        if !matches_price_list(&order) {
            warn!("Checkout order does not match the price list: {:?}", order);
            return Err(AppError::Validation(
                "Order does not match the current price list".to_string(),
            ));
        }

        let receipt = CheckoutReceipt::pending(order);
        info!(
            "Checkout submitted: reference={}, total={}",
            receipt.order_reference,
            pricing::format_usd(receipt.order.price)
        );
        Ok(receipt)
    }
}

fn matches_price_list(order: &OrderDetails) -> bool {
    match order.order_type {
        OrderType::Package => find_package(&order.package_id)
            .is_some_and(|p| p.credits == order.credits && p.price == order.price),
        OrderType::Custom => {
            pricing::custom_price(order.credits).is_ok_and(|price| price == order.price)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_packages() {
        let offers = CheckoutService::new().packages();
        assert_eq!(offers.len(), 3);
        assert_eq!(offers[1].package.id, "growth");
        assert_eq!(offers[1].price_per_credit, dec!(0.01));
        assert_eq!(offers[1].estimate.minutes, 6_250);
        assert_eq!(
            offers[0].checkout_link,
            "/checkout?type=package&packageId=starter&credits=1000&price=12"
        );

        let json = serde_json::to_value(&offers[1]).unwrap();
        assert_eq!(json["id"], "growth");
        assert_eq!(json["popular"], true);
        assert_eq!(json["estimate"]["messages"], 16_650);
    }

    #[test]
    fn test_quote() {
        let quote = CheckoutService::new().quote(1_500).unwrap();
        assert_eq!(quote.order.price, dec!(15.00));
        assert_eq!(quote.summary.total_display, "$15.00");
        assert_eq!(
            quote.checkout_link,
            "/checkout?type=custom&packageId=custom&credits=1500&price=15"
        );

        let err = CheckoutService::new().quote(99).unwrap_err();
        assert_eq!(err.to_string(), "Minimum purchase is 100 credits");
    }

    #[test]
    fn test_order_from_query() {
        let svc = CheckoutService::new();
        let err = svc.order_from_query(&OrderQuery::default()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let order = svc
            .order_from_query(&OrderQuery {
                credits: Some("5000".to_string()),
                price: Some("50".to_string()),
                package_id: Some("growth".to_string()),
                order_type: None,
            })
            .unwrap();
        assert_eq!(order.order_type, OrderType::Package);
    }

    #[test]
    fn test_submit_checks_price_list() {
        let svc = CheckoutService::new();

        let receipt = svc
            .submit(OrderDetails::for_package(find_package("business").unwrap()))
            .unwrap();
        assert_eq!(receipt.status, "payment_pending");

        assert!(svc.submit(OrderDetails::custom(250).unwrap()).is_ok());

        let mut tampered = OrderDetails::for_package(find_package("growth").unwrap());
        tampered.price = dec!(5);
        let err = svc.submit(tampered).unwrap_err();
        assert_eq!(err.to_string(), "Order does not match the current price list");

        let mut tampered = OrderDetails::custom(1_000).unwrap();
        tampered.price = dec!(1);
        assert!(svc.submit(tampered).is_err());
    }
}
