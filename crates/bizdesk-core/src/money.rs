//! # Money Module
//!
//! Currency amounts for every ledger record.
//!
//! ## Why Integer Cents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DASHBOARD TOTALS                                                       │
//! │                                                                         │
//! │  Summing 0.10 + 0.20 in floating point gives 0.30000000000000004,      │
//! │  and the result depends on the order the expenses were added.          │
//! │                                                                         │
//! │  Summing 10 + 20 cents gives exactly 30 cents, in any order.           │
//! │  Paid + Pending always equals the grand total, to the cent.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bizdesk_core::money::Money;
//!
//! let rent = Money::from_cents(120_000);
//! let coffee = Money::from_major_minor(4, 50);
//!
//! let total: Money = [rent, coffee].into_iter().sum();
//! assert_eq!(total.to_string(), "$1204.50");
//! assert_eq!(total.format_with_symbol("€"), "€1,204.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A currency amount in cents.
///
/// Signed so that derived values such as an overpaid invoice's outstanding
/// balance can go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use bizdesk_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(4750_00).cents(), 475_000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole units and cents.
    ///
    /// For negative amounts only `major` carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the raw value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole currency units, truncated toward zero.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// The cents part, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ```rust
    /// use bizdesk_core::money::Money;
    ///
    /// let rate = Money::from_major(150);
    /// assert_eq!(rate.multiply_quantity(8), Money::from_major(1200));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Sum that reports overflow instead of wrapping.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// [`Money::multiply_quantity`] that reports overflow instead of
    /// wrapping.
    ///
    /// ```rust
    /// use bizdesk_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(3).checked_multiply_quantity(2), Some(Money::from_major(6)));
    /// assert_eq!(Money::from_cents(i64::MAX / 10).checked_multiply_quantity(1000), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Plain decimal form without symbol or grouping: `1234.50`, `-5.50`.
    ///
    /// This is the form written to CSV exports.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }

    /// Display form with a currency symbol and thousands separators:
    /// `$12,345.60`, `-$5.50`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.dollars().abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        format!("{}{}{}.{:02}", sign, symbol, grouped, self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering (`$10.99`). The UI formats with
/// [`Money::format_with_symbol`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
        assert_eq!(Money::from_major(4750).cents(), 475_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(123_450).to_decimal_string(), "1234.50");
        assert_eq!(Money::from_cents(-550).to_decimal_string(), "-5.50");
        assert_eq!(Money::from_cents(7).to_decimal_string(), "0.07");
    }

    #[test]
    fn test_format_with_symbol_groups_thousands() {
        assert_eq!(Money::from_cents(99).format_with_symbol("$"), "$0.99");
        assert_eq!(Money::from_major(999).format_with_symbol("$"), "$999.00");
        assert_eq!(Money::from_major(1000).format_with_symbol("$"), "$1,000.00");
        assert_eq!(
            Money::from_cents(123_456_789).format_with_symbol("$"),
            "$1,234,567.89"
        );
        assert_eq!(
            Money::from_major(-12_500).format_with_symbol("€"),
            "-€12,500.00"
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((-a).cents(), -1000);

        let mut c = a;
        c += b;
        c -= Money::from_cents(250);
        assert_eq!(c.cents(), 1250);
    }

    #[test]
    fn test_sum_is_order_independent() {
        let values = [
            Money::from_cents(10),
            Money::from_cents(20),
            Money::from_cents(33_333),
            Money::from_cents(1),
        ];
        let forward: Money = values.iter().sum();
        let backward: Money = values.iter().rev().sum();
        assert_eq!(forward, backward);
        assert_eq!(forward.cents(), 33_364);

        let empty: Vec<Money> = Vec::new();
        assert!(empty.into_iter().sum::<Money>().is_zero());
    }

    #[test]
    fn test_checked_arithmetic() {
        let big = Money::from_cents(i64::MAX / 2 + 1);
        assert_eq!(big.checked_add(big), None);
        assert_eq!(
            Money::from_cents(10).checked_add(Money::from_cents(5)),
            Some(Money::from_cents(15))
        );

        assert_eq!(Money::from_cents(i64::MAX / 10).checked_multiply_quantity(1000), None);
        assert_eq!(
            Money::from_major(150).checked_multiply_quantity(8),
            Some(Money::from_major(1200))
        );
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(1).is_positive());
        assert!(Money::from_cents(-1).is_negative());
        assert_eq!(Money::from_cents(-550).abs().cents(), 550);
    }
}
