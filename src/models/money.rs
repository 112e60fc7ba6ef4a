//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Besides the usual arithmetic, this type carries the two rounding
//! operations the summary engine needs: day-ratio proration for income
//! normalization and percentage shares for ownership splitting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as cents (hundredths of the currency unit)
///
/// All amounts in one snapshot share a single currency; the engine never
/// converts between currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Scale this amount by `numerator / denominator`, rounding half-up
    ///
    /// Used to prorate a pay-cycle amount onto a budget period: the amount
    /// times period days over cycle days. Panics on a zero denominator, which
    /// cannot occur for the fixed cycle lengths the engine uses.
    pub fn prorate(&self, numerator: i64, denominator: i64) -> Self {
        debug_assert!(denominator > 0);
        let scaled = i128::from(self.0) * i128::from(numerator);
        let denom = i128::from(denominator);
        // round half away from zero
        let rounded = if scaled >= 0 {
            (scaled + denom / 2) / denom
        } else {
            (scaled - denom / 2) / denom
        };
        Self(rounded as i64)
    }

    /// Take a percentage share of this amount, rounded to the nearest cent
    ///
    /// `percent` is on the 0-100 scale. A 70% share of $100.00 is $70.00.
    pub fn share(&self, percent: f64) -> Self {
        Self((self.0 as f64 * percent / 100.0).round() as i64)
    }

    /// Format with a currency symbol for terminal display
    pub fn display_with(&self, symbol: &str) -> String {
        let cents = self.0.abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}{}.{:02}", sign, symbol, cents / 100, cents % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_with("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_display_with_symbol() {
        assert_eq!(Money::from_cents(250000).display_with("€"), "€2500.00");
        assert_eq!(Money::from_cents(-99).display_with("£"), "-£0.99");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_prorate() {
        // $1000 weekly salary onto a 30-day period: 100000 * 30 / 7
        let weekly = Money::from_cents(100_000);
        assert_eq!(weekly.prorate(30, 7).cents(), 428_571);

        // exact ratios stay exact
        let monthly = Money::from_cents(500_000);
        assert_eq!(monthly.prorate(30, 30).cents(), 500_000);

        // half rounds away from zero
        assert_eq!(Money::from_cents(5).prorate(1, 2).cents(), 3);
        assert_eq!(Money::from_cents(-5).prorate(1, 2).cents(), -3);
    }

    #[test]
    fn test_share() {
        let spend = Money::from_cents(10_000);
        assert_eq!(spend.share(70.0).cents(), 7_000);
        assert_eq!(spend.share(50.0).cents(), 5_000);
        assert_eq!(spend.share(100.0).cents(), 10_000);
        assert_eq!(spend.share(0.0).cents(), 0);

        // odd cents round to nearest
        assert_eq!(Money::from_cents(101).share(50.0).cents(), 51);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
