//! # Money Type
//!
//! Integer-based monetary values for prices, revenue and stock valuation.
//!
//! ## Why Not f64?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  0.1 + 0.2 = 0.30000000000000004   (f64)                                │
//! │   10 +  20 = 30                     (i64 cents)                          │
//! │                                                                         │
//! │  Revenue, sale totals and stock valuation are sums over many records.  │
//! │  Summing floats drifts; summing cents does not.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantities (kg, acres, packets) stay `f64` because they are measured,
//! not counted. The only place the two meet is [`Money::multiply_quantity`],
//! which rounds back to whole cents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  HarvestRecord.price_per_unit ──► × quantity ──► HarvestRecord.total    │
/// │                                                                         │
/// │  InventoryItem.price_per_unit ──► × current_stock ──► stock valuation   │
/// │                                                                         │
/// │  Farmer.revenue ──► FarmerSummary.total_revenue                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use agri_core::money::Money;
    ///
    /// let price = Money::from_cents(35_000); // 350.00
    /// assert_eq!(price.cents(), 35_000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole major units.
    ///
    /// ## Example
    /// ```rust
    /// use agri_core::money::Money;
    ///
    /// let revenue = Money::from_major(89_500);
    /// assert_eq!(revenue.cents(), 8_950_000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole major units (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value in major units as a float.
    ///
    /// For comparisons against display thresholds (price bands) and
    /// averages only. Never feed the result back into a Money.
    #[inline]
    pub fn as_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a measured quantity.
    ///
    /// The exact product is rounded half-to-even to whole cents, so a
    /// long ledger of harvest totals carries no systematic rounding bias.
    ///
    /// ## Example
    /// ```rust
    /// use agri_core::money::Money;
    ///
    /// let per_kg = Money::from_major(350);
    /// let total = per_kg.multiply_quantity(125.5);
    /// assert_eq!(total, Money::from_major(43_925));
    /// ```
    pub fn multiply_quantity(&self, qty: f64) -> Money {
        let exact = self.0 as f64 * qty;
        let floor = exact.floor();
        let frac = exact - floor;

        let rounded = if frac > 0.5 {
            floor + 1.0
        } else if frac < 0.5 {
            floor
        } else if floor % 2.0 == 0.0 {
            floor
        } else {
            floor + 1.0
        };

        Money(rounded as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display. Frontends format with their own locale.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.minor_part())
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

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
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
    fn test_from_major() {
        let money = Money::from_major(350);
        assert_eq!(money.cents(), 35_000);
        assert_eq!(money.major(), 350);
        assert_eq!(money.minor_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_major(500)), "$500.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let values = [Money::from_major(1), Money::from_major(2), Money::from_cents(50)];
        let total: Money = values.iter().sum();
        assert_eq!(total.cents(), 350);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_multiply_fractional_quantity() {
        // Seeded tea harvest: 125.5 kg at 350.00
        let total = Money::from_major(350).multiply_quantity(125.5);
        assert_eq!(total.cents(), 4_392_500);
    }

    #[test]
    fn test_multiply_rounds_half_to_even() {
        // 0.05 × 0.5 = 2.5 cents → 2
        assert_eq!(Money::from_cents(5).multiply_quantity(0.5).cents(), 2);
        // 0.07 × 0.5 = 3.5 cents → 4
        assert_eq!(Money::from_cents(7).multiply_quantity(0.5).cents(), 4);
        // 0.10 × 0.26 = 2.6 cents → 3
        assert_eq!(Money::from_cents(10).multiply_quantity(0.26).cents(), 3);
    }

    #[test]
    fn test_as_major_f64() {
        assert!((Money::from_cents(9_999).as_major_f64() - 99.99).abs() < 1e-9);
    }
}
