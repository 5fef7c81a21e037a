//! Credit pricing
//!
//! Credits are the product's billing unit. Packages have fixed prices; a
//! custom quantity is charged at a flat per-credit rate. Minute and message
//! figures are rough conversions shown to buyers, not guarantees.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;

/// USD charged per credit for custom quantities
pub const PRICE_PER_CREDIT: Decimal = dec!(0.01);

/// Smallest custom purchase
pub const MIN_CUSTOM_CREDITS: u64 = 100;

/// Approximate voice minutes per credit
pub const MINUTES_PER_CREDIT: Decimal = dec!(1.25);

/// Approximate chat messages per credit
pub const MESSAGES_PER_CREDIT: Decimal = dec!(3.33);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("Minimum purchase is {min} credits")]
    BelowMinimum { min: u64 },

    #[error("Credits must be greater than zero")]
    ZeroCredits,
}

/// Pay-as-you-go usage rate for one channel
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRate {
    pub channel: &'static str,
    pub unit: &'static str,
    pub usd: Decimal,
    pub inr: Decimal,
}

/// Voice and chat rates advertised on the pricing section
pub const USAGE_RATES: [UsageRate; 2] = [
    UsageRate {
        channel: "Voice Calls",
        unit: "minute",
        usd: dec!(0.01),
        inr: dec!(0.8),
    },
    UsageRate {
        channel: "Messages",
        unit: "message",
        usd: dec!(0.004),
        inr: dec!(0.3),
    },
];

/// A pre-configured credit bundle
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditPackage {
    pub id: &'static str,
    pub name: &'static str,
    pub credits: u64,
    /// Price in USD
    pub price: Decimal,
    /// Reference price in rupees, display only
    pub original_price: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

/// The fixed package catalog
pub static CREDIT_PACKAGES: [CreditPackage; 3] = [
    CreditPackage {
        id: "starter",
        name: "Starter Pack",
        credits: 1_000,
        price: dec!(12),
        original_price: "₹999",
        features: &[
            "1,000 credits included",
            "~1,250 minutes of voice calls",
            "~3,300 chat messages",
            "Mix and match as needed",
            "5 local languages",
            "Basic analytics",
            "Email support",
        ],
        popular: false,
    },
    CreditPackage {
        id: "growth",
        name: "Growth Pack",
        credits: 5_000,
        price: dec!(50),
        original_price: "₹4,199",
        features: &[
            "5,000 credits included",
            "~6,250 minutes of voice calls",
            "~16,600 chat messages",
            "Mix and match as needed",
            "All 10 languages",
            "Advanced analytics",
            "Priority support",
            "CRM integrations",
        ],
        popular: true,
    },
    CreditPackage {
        id: "business",
        name: "Business Pack",
        credits: 15_000,
        price: dec!(120),
        original_price: "₹9,999",
        features: &[
            "15,000 credits included",
            "~18,750 minutes of voice calls",
            "~50,000 chat messages",
            "Mix and match as needed",
            "Custom integrations",
            "Dedicated support",
            "Custom voice training",
            "Priority delivery",
        ],
        popular: false,
    },
];

/// Look up a package by id
pub fn find_package(id: &str) -> Option<&'static CreditPackage> {
    CREDIT_PACKAGES.iter().find(|p| p.id == id)
}

/// Price of a custom quantity: `credits × 0.01`, two decimals
pub fn custom_price(credits: u64) -> Result<Decimal, PricingError> {
    if credits < MIN_CUSTOM_CREDITS {
        return Err(PricingError::BelowMinimum {
            min: MIN_CUSTOM_CREDITS,
        });
    }

    Ok(round_money(Decimal::from(credits) * PRICE_PER_CREDIT))
}

/// Effective price of one credit, four decimals
pub fn price_per_credit(price: Decimal, credits: u64) -> Result<Decimal, PricingError> {
    if credits == 0 {
        return Err(PricingError::ZeroCredits);
    }

    Ok((price / Decimal::from(credits))
        .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero))
}

/// Round to cents
#[inline]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// What a number of credits roughly buys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditEstimate {
    pub minutes: u64,
    pub messages: u64,
}

impl CreditEstimate {
    pub fn for_credits(credits: u64) -> Self {
        let credits = Decimal::from(credits);
        Self {
            minutes: floor_to_u64(credits * MINUTES_PER_CREDIT),
            messages: floor_to_u64(credits * MESSAGES_PER_CREDIT),
        }
    }
}

fn floor_to_u64(value: Decimal) -> u64 {
    value.floor().to_u64().unwrap_or(u64::MAX)
}

/// `$12.00` style display
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", round_money(amount))
}

/// `15,000` style display
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
