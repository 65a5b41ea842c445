//! Money type with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Decimal places of a major-unit amount (cents for USD).
pub const CENT_PLACES: u32 = 2;

/// Represents a monetary amount in major currency units (e.g., dollars).
///
/// Uses `Decimal` internally to avoid floating-point precision errors. The
/// currency itself is carried alongside by callers, since quotes echo
/// whatever code the platform sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    /// The amount in major units.
    pub amount: Decimal,
}

impl Money {
    /// Creates a new Money instance from a major-unit amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Creates a zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
        }
    }

    /// Converts a minor-unit amount into major units.
    ///
    /// The minor amount is first rounded to a whole number of cents.
    #[must_use]
    pub fn from_minor_units(minor: Decimal) -> Self {
        Self::new(round_half_up(minor, 0) / Decimal::ONE_HUNDRED)
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Rounds to whole cents, half away from zero.
    #[must_use]
    pub fn round_cents(self) -> Self {
        Self::new(round_half_up(self.amount, CENT_PLACES))
    }

    /// Adds two amounts, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.amount.checked_add(other.amount).map(Self::new)
    }

    /// Multiplies by a plain factor (e.g., a percentage), returning `None` on overflow.
    #[must_use]
    pub fn checked_scale(self, factor: Decimal) -> Option<Self> {
        self.amount.checked_mul(factor).map(Self::new)
    }

    /// Returns the amount as a whole number of minor units.
    #[must_use]
    pub fn checked_minor_units(self) -> Option<Decimal> {
        self.amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|minor| round_half_up(minor, 0).normalize())
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.amount)
    }
}

/// Rounds half away from zero, matching how checkout totals are rounded.
#[must_use]
pub fn round_half_up(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_new() {
        let amount = dec!(100.00);
        let money = Money::new(amount);
        assert_eq!(money.amount, amount);
    }

    #[test]
    fn test_money_zero() {
        let money = Money::zero();
        assert!(money.is_zero());
        assert!(!money.is_positive());
        assert_eq!(money.amount, Decimal::ZERO);
    }

    #[test]
    fn test_money_is_positive() {
        assert!(Money::new(dec!(10)).is_positive());
        assert!(!Money::new(dec!(-10)).is_positive());
        assert!(!Money::new(dec!(0)).is_positive());
    }

    #[test]
    fn test_from_minor_units() {
        assert_eq!(Money::from_minor_units(dec!(2400)).amount, dec!(24));
        assert_eq!(Money::from_minor_units(dec!(1999)).amount, dec!(19.99));
        // Fractional cents round to a whole cent first
        assert_eq!(Money::from_minor_units(dec!(1999.5)).amount, dec!(20));
        assert_eq!(Money::from_minor_units(dec!(1999.4)).amount, dec!(19.99));
    }

    #[test]
    fn test_round_cents_half_away_from_zero() {
        assert_eq!(Money::new(dec!(1.005)).round_cents().amount, dec!(1.01));
        assert_eq!(Money::new(dec!(1.004)).round_cents().amount, dec!(1.00));
        assert_eq!(Money::new(dec!(0.125)).round_cents().amount, dec!(0.13));
    }

    #[test]
    fn test_checked_minor_units() {
        assert_eq!(
            Money::new(dec!(7.20)).checked_minor_units().map(|m| m.to_string()),
            Some("720".to_string())
        );
        assert_eq!(
            Money::new(dec!(18)).checked_minor_units().map(|m| m.to_string()),
            Some("1800".to_string())
        );
        assert_eq!(
            Money::zero().checked_minor_units().map(|m| m.to_string()),
            Some("0".to_string())
        );
        assert!(Money::new(Decimal::MAX).checked_minor_units().is_none());
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let max = Money::new(Decimal::MAX);
        assert!(max.checked_add(Money::new(Decimal::ONE)).is_none());
        assert!(max.checked_scale(dec!(2)).is_none());
        assert_eq!(
            Money::new(dec!(24)).checked_scale(dec!(0.05)),
            Some(Money::new(dec!(1.20)))
        );
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(dec!(7.2)).to_string(), "7.20");
        assert_eq!(Money::new(dec!(18)).to_string(), "18.00");
    }
}
