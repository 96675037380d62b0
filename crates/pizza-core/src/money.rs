//! # Money Module
//!
//! Provides the `Money` type for prices and order totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Size 8.00 + Crust 1.50 + 0.5 + 0.5 in floating point is fine,          │
//! │  but 0.1 + 0.2 = 0.30000000000000004 is not.                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    800 + 150 + 50 + 50 = 1050 cents = $10.50, always exact              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizza_core::money::Money;
//!
//! let size = Money::from_cents(800);   // $8.00
//! let crust = Money::from_cents(150);  // $1.50
//! let surcharge = Money::from_cents(50).multiply_quantity(2);
//!
//! assert_eq!((size + crust + surcharge).to_string(), "$10.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Size.price ──┐
///              ├──► pricing::total() ──► SelectionState.cost ──► "Total $10.50"
/// Crust.price ─┤
///              │
/// surcharge ───┘  (50 cents per topping beyond the third)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// let price = Money::from_cents(1050);
    /// assert_eq!(price.cents(), 1050);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal amount as it appears in catalog data (e.g. `1.5`)
    /// into cents, rounding half away from zero.
    ///
    /// Returns `None` for NaN, infinities and values outside the i64 cent range.
    /// This is the only place a float becomes Money; it exists for the catalog
    /// boundary and nothing inside the core calls it.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(1.5), Some(Money::from_cents(150)));
    /// assert_eq!(Money::from_decimal(8.0), Some(Money::from_cents(800)));
    /// assert_eq!(Money::from_decimal(f64::NAN), None);
    /// ```
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }
        let cents = (amount * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Formats as `{sign}{symbol}{dollars}.{cents}`, e.g. `€10.50`.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1050).format_with_symbol("€"), "€10.50");
    /// assert_eq!(Money::from_cents(-150).format_with_symbol("$"), "-$1.50");
    /// ```
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }

    /// Multiplies money by a count of units.
    ///
    /// ```rust
    /// use pizza_core::money::Money;
    ///
    /// let surcharge = Money::from_cents(50).multiply_quantity(3);
    /// assert_eq!(surcharge.cents(), 150);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$12.34`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
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
    fn test_from_decimal_rounds_to_nearest_cent() {
        assert_eq!(Money::from_decimal(0.5), Some(Money::from_cents(50)));
        assert_eq!(Money::from_decimal(10.5), Some(Money::from_cents(1050)));
        // 0.1 + 0.2 lands on 30 cents, not 30.000000000000004
        assert_eq!(Money::from_decimal(0.1 + 0.2), Some(Money::from_cents(30)));
        assert_eq!(Money::from_decimal(1.005 + 0.0001), Some(Money::from_cents(101)));
    }

    #[test]
    fn test_from_decimal_rejects_non_finite() {
        assert_eq!(Money::from_decimal(f64::INFINITY), None);
        assert_eq!(Money::from_decimal(f64::NEG_INFINITY), None);
        assert_eq!(Money::from_decimal(f64::NAN), None);
        assert_eq!(Money::from_decimal(1e300), None);
        assert_eq!(Money::from_decimal(2f64.powi(63) / 100.0), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(50)), "$0.50");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(800);
        let b = Money::from_cents(150);

        assert_eq!((a + b).cents(), 950);
        assert_eq!(Money::from_cents(50).multiply_quantity(2).cents(), 100);
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_cents(800).format_with_symbol("¥"), "¥8.00");
        assert_eq!(Money::zero().format_with_symbol(""), "0.00");
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_cents(-1).is_negative());
        assert_eq!(Money::default(), Money::zero());
    }
}
