//! # Money Module
//!
//! Provides the `Money` type used for product prices.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    "99.99" is stored as 9999 and printed back as "99.99"               │
//! │    Currency precision is exact; nothing is ever rounded                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099);
//!
//! // Or parse a decimal string coming from a form or a fixture
//! let same: Money = "10.99".parse().unwrap();
//! assert_eq!(price, same);
//! assert_eq!(price.to_string(), "10.99");
//! ```
//!
//! ## Wire Format
//! Storage is integer cents, but JSON carries the decimal form: `Money`
//! serializes as the string `"10.99"` and accepts `"10.99"`, `10.99` or `10`.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Number of fractional digits kept for every price.
pub const MINOR_DIGITS: usize = 2;

const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents, fen, ...).
///
/// ## Design Decisions
/// - **i64 (signed)**: the type itself does not forbid negative values;
///   the catalog performs no validation on prices
/// - **Single field tuple struct**: zero-cost abstraction over i64, stored as
///   a plain INTEGER column when the `sqlx` feature is on
/// - **Decimal on the wire**: serde goes through `Display`/`FromStr`, never
///   through the raw cent count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// let price = Money::from_cents(9999);
    /// assert_eq!(price.cents(), 9999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use catalog_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(199, 99).cents(), 19999);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * MINOR_PER_MAJOR - minor)
        } else {
            Money(major * MINOR_PER_MAJOR + minor)
        }
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit part, truncated toward zero.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the fractional part (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain decimal rendering with exactly two fractional digits ("99.99").
///
/// No currency symbol is printed; the catalog does not model currencies.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Parses a decimal string such as `"99.99"`, `"5"` or `"-0.5"`.
///
/// ## Rules
/// - Optional leading `+` or `-`
/// - At least one integer digit
/// - At most [`MINOR_DIGITS`] fractional digits; `"1.5"` means 1.50
impl FromStr for Money {
    type Err = CoreError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::invalid_price(input, "expected a decimal number"));
        }

        let minor = match fraction {
            None => 0,
            Some(digits) => {
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(CoreError::invalid_price(
                        input,
                        "expected digits after the decimal point",
                    ));
                }
                if digits.len() > MINOR_DIGITS {
                    return Err(CoreError::invalid_price(
                        input,
                        "at most 2 decimal places allowed",
                    ));
                }
                // "5" after the point is 50 minor units, not 5
                let padded = format!("{:0<width$}", digits, width = MINOR_DIGITS);
                padded
                    .parse::<i64>()
                    .map_err(|e| CoreError::invalid_price(input, e.to_string()))?
            }
        };

        let cents = whole
            .parse::<i64>()
            .ok()
            .and_then(|major| major.checked_mul(MINOR_PER_MAJOR))
            .and_then(|major| major.checked_add(minor))
            .ok_or_else(|| CoreError::invalid_price(input, "amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Shapes a price may arrive in. Browsers tend to send `parseFloat` output.
#[derive(Deserialize)]
#[serde(untagged)]
enum WirePrice {
    Text(String),
    Whole(i64),
    Decimal(f64),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let parsed = match WirePrice::deserialize(deserializer)? {
            WirePrice::Text(text) => text.parse::<Money>(),
            WirePrice::Whole(major) => major
                .checked_mul(MINOR_PER_MAJOR)
                .map(Money)
                .ok_or_else(|| CoreError::invalid_price(major.to_string(), "amount is too large")),
            // Shortest round-trip formatting: 99.99 prints as "99.99"
            WirePrice::Decimal(value) => value.to_string().parse::<Money>(),
        };
        parsed.map_err(de::Error::custom)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
