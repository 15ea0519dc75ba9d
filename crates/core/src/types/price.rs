//! Type-safe price representation in minor currency units.
//!
//! Catalog prices and line totals are integers in the smallest unit of the
//! store currency (paise for INR). Display and percentage arithmetic go
//! through [`rust_decimal::Decimal`] so nothing is ever rounded through `f64`.

use core::fmt;
use core::ops::Add;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::Quantity;

/// An amount of money in minor currency units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self(0);

    /// Create a price from an amount in minor units.
    #[must_use]
    pub const fn from_minor(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Amount in minor units.
    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Amount in the currency's standard unit (e.g. rupees, not paise).
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, CurrencyCode::MINOR_UNIT_SCALE)
    }

    /// Total for `quantity` units at this price.
    ///
    /// Saturates instead of overflowing.
    #[must_use]
    pub fn times(&self, quantity: Quantity) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity.as_u32())))
    }

    /// Percentage saved relative to `original`, rounded half away from zero.
    ///
    /// Returns `None` unless `original` is strictly greater than `self`.
    #[must_use]
    pub fn discount_percent_from(&self, original: Self) -> Option<u8> {
        if original.0 <= self.0 || original.0 <= 0 {
            return None;
        }

        let saved = Decimal::from(original.0 - self.0);
        let percent = (saved / Decimal::from(original.0) * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        percent.to_u8()
    }

    /// Format for display in the given currency (e.g. "₹24.99").
    #[must_use]
    pub fn display_in(&self, currency: CurrencyCode) -> String {
        format!("{}{:.2}", currency.symbol(), self.to_decimal())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_in(CurrencyCode::default()))
    }
}

impl From<i64> for Price {
    fn from(minor_units: i64) -> Self {
        Self(minor_units)
    }
}

/// ISO 4217 currency codes the storefront can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Decimal places between minor and standard units.
    pub const MINOR_UNIT_SCALE: u32 = 2;

    /// Display symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_rupee_symbol_and_two_places() {
        assert_eq!(Price::from_minor(2499).to_string(), "₹24.99");
        assert_eq!(Price::from_minor(4998).to_string(), "₹49.98");
        assert_eq!(Price::from_minor(5).to_string(), "₹0.05");
    }

    #[test]
    fn test_display_in_other_currency() {
        assert_eq!(Price::from_minor(1000).display_in(CurrencyCode::USD), "$10.00");
    }

    #[test]
    fn test_times() {
        let price = Price::from_minor(2499);
        assert_eq!(price.times(Quantity::ONE.incremented()), Price::from_minor(4998));
        assert_eq!(price.times(Quantity::ONE), price);
    }

    #[test]
    fn test_times_saturates() {
        let price = Price::from_minor(i64::MAX);
        let two = Quantity::ONE.incremented();
        assert_eq!(price.times(two), Price::from_minor(i64::MAX));
    }

    #[test]
    fn test_discount_percent() {
        // 3299 -> 2499 saves 24.25%
        assert_eq!(
            Price::from_minor(2499).discount_percent_from(Price::from_minor(3299)),
            Some(24)
        );
        // 5999 -> 4599 saves 23.34%
        assert_eq!(
            Price::from_minor(4599).discount_percent_from(Price::from_minor(5999)),
            Some(23)
        );
        // 200 -> 100 saves exactly half
        assert_eq!(
            Price::from_minor(100).discount_percent_from(Price::from_minor(200)),
            Some(50)
        );
    }

    #[test]
    fn test_no_discount_when_original_not_higher() {
        let price = Price::from_minor(1599);
        assert_eq!(price.discount_percent_from(price), None);
        assert_eq!(price.discount_percent_from(Price::from_minor(1000)), None);
    }

    #[test]
    fn test_sum() {
        let total: Price = [100, 250, 5].into_iter().map(Price::from_minor).sum();
        assert_eq!(total, Price::from_minor(355));
    }
}
