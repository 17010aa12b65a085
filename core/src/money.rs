//! Money amounts in integer minor units.
//!
//! The wire contract uses plain JSON decimal numbers (`45.5`), but all
//! arithmetic in this workspace is done on `i64` cents so that order totals
//! are exact. Conversion happens once, at the serde boundary.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Money amount in cents (to avoid floating point issues).
///
/// # Examples
///
/// ```
/// use storefront_core::Money;
///
/// let price = Money::from_cents(4550);
/// assert_eq!(price.checked_mul(2), Some(Money::from_cents(9100)));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Zero amount, the starting point for running totals.
    pub const ZERO: Self = Self(0);

    /// Creates a new money amount from cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the amount in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns true when the amount is strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Returns the amount as a decimal number of major units.
    ///
    /// Only used for serialization and display; never for arithmetic.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Converts a decimal major-unit amount into cents, rounding to the
    /// nearest cent.
    ///
    /// Returns `None` for non-finite values or values outside the `i64`
    /// cent range.
    #[must_use]
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        // i64::MAX as f64 rounds up, so compare against the exactly
        // representable power-of-two bound.
        if cents.abs() >= 9_223_372_036_854_775_808.0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        Some(Self(cents as i64))
    }
}

impl Money {
    /// Adds two amounts, returning `None` on overflow.
    ///
    /// Arithmetic on money is always checked: `from_decimal` accepts any
    /// amount that fits in i64 cents, so unchecked sums could wrap.
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Multiplies the amount by a quantity, returning `None` on overflow.
    #[must_use]
    pub const fn checked_mul(self, qty: u32) -> Option<Self> {
        match self.0.checked_mul(qty as i64) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.abs();
        write!(f, "{sign}{}.{:02}", cents / 100, cents % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::from_decimal(value)
            .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {value}")))
    }
}
