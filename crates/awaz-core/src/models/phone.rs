//! Phone number normalization
//!
//! Destination numbers arrive as free-form text from the demo form. Only
//! digits and `+` are kept; the remaining string must match one of three
//! shapes. Bare ten digit numbers are assumed to be Indian.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Country code assumed for numbers without one
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// Shortest international number (digits after `+`)
const MIN_INTERNATIONAL_DIGITS: usize = 10;

/// Longest international number (digits after `+`), per E.164
const MAX_INTERNATIONAL_DIGITS: usize = 15;

/// Rejection reasons, worded for the person filling the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("Phone number is required")]
    Empty,

    #[error("Please enter a valid phone number (e.g., +911234567890 or 1234567890)")]
    InvalidFormat,
}

/// Which accepted shape a number matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneFormat {
    /// `+91` followed by ten digits
    Indian,
    /// Ten digits, `+91` added
    IndianLocal,
    /// `+` followed by ten to fifteen digits
    International,
}

/// A validated number in `+<digits>` form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and normalize a free-form phone number
    pub fn parse(raw: &str) -> Result<Self, PhoneError> {
        Self::parse_with_format(raw).map(|(number, _)| number)
    }

    /// Like [`PhoneNumber::parse`], also reporting the matched shape
    pub fn parse_with_format(raw: &str) -> Result<(Self, PhoneFormat), PhoneError> {
        let cleaned = clean(raw);

        if cleaned.is_empty() {
            return Err(PhoneError::Empty);
        }

        if let Some(rest) = cleaned.strip_prefix(DEFAULT_COUNTRY_CODE) {
            if rest.len() == 10 && all_digits(rest) {
                return Ok((Self(cleaned), PhoneFormat::Indian));
            }
        }

        if cleaned.len() == 10 && all_digits(&cleaned) {
            let formatted = format!("{}{}", DEFAULT_COUNTRY_CODE, cleaned);
            return Ok((Self(formatted), PhoneFormat::IndianLocal));
        }

        if let Some(rest) = cleaned.strip_prefix('+') {
            if (MIN_INTERNATIONAL_DIGITS..=MAX_INTERNATIONAL_DIGITS).contains(&rest.len())
                && all_digits(rest)
            {
                return Ok((Self(cleaned), PhoneFormat::International));
            }
        }

        Err(PhoneError::InvalidFormat)
    }

    /// The normalized number
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the normalized string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Keep only digits and `+`
pub fn clean(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Lenient normalization for numbers handed straight to a vendor.
///
/// No shape check: anything not starting with `+` gets `+91`.
pub fn dial_string(raw: &str) -> String {
    let cleaned = clean(raw);
    if cleaned.starts_with('+') {
        cleaned
    } else {
        format!("{}{}", DEFAULT_COUNTRY_CODE, cleaned)
    }
}

/// Countries offered by the landing-page demo form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Country {
    #[serde(rename = "IN")]
    India,
    #[serde(rename = "NP")]
    Nepal,
    Other,
}

impl Country {
    /// All selectable countries, in display order
    pub const ALL: [Country; 3] = [Country::India, Country::Nepal, Country::Other];

    /// Two letter code used by the form
    pub fn code(&self) -> &'static str {
        match self {
            Country::India => "IN",
            Country::Nepal => "NP",
            Country::Other => "OTHER",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Country::India => "India",
            Country::Nepal => "Nepal",
            Country::Other => "Other",
        }
    }

    pub fn dial_code(&self) -> &'static str {
        match self {
            Country::India => "+91",
            Country::Nepal => "+977",
            Country::Other => "+",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "IN" => Some(Country::India),
            "NP" => Some(Country::Nepal),
            "OTHER" => Some(Country::Other),
            _ => None,
        }
    }

    /// Join the dial code with a locally typed number.
    ///
    /// Numbers already carrying a `+` are left alone.
    pub fn compose(&self, local_number: &str) -> String {
        let cleaned = clean(local_number);
        if cleaned.starts_with('+') {
            cleaned
        } else {
            format!("{}{}", self.dial_code(), cleaned)
        }
    }
}
