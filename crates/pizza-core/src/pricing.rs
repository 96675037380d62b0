//! # Pricing
//!
//! The price of a pizza is its size, plus its crust, plus a flat surcharge
//! for every topping beyond the free ones.
//!
//! ```text
//! cost = size.price + crust.price + max(0, toppings - 3) × $0.50
//! ```
//!
//! Topping count is the only topping input. Individual toppings have no price.

use crate::money::Money;
use crate::types::{Crust, Size};

/// Number of toppings included at no extra charge.
pub const FREE_TOPPINGS: usize = 3;

/// Flat fee for each topping beyond [`FREE_TOPPINGS`].
pub const TOPPING_SURCHARGE: Money = Money::from_cents(50);

/// Surcharge owed for `topping_count` toppings.
///
/// ```rust
/// use pizza_core::pricing::surcharge;
///
/// assert_eq!(surcharge(3).cents(), 0);
/// assert_eq!(surcharge(5).cents(), 100);
/// ```
pub fn surcharge(topping_count: usize) -> Money {
    let extra = topping_count.saturating_sub(FREE_TOPPINGS);
    TOPPING_SURCHARGE.multiply_quantity(extra as i64)
}

/// Surcharge on the topping at `position` (zero-based, catalog order).
///
/// The review screen shows `(+ $0.50)` next to every topping from the fourth on.
pub fn topping_surcharge_at(position: usize) -> Money {
    if position >= FREE_TOPPINGS {
        TOPPING_SURCHARGE
    } else {
        Money::zero()
    }
}

/// Total cost of a pizza. Missing size or crust contribute nothing.
pub fn total(size: Option<&Size>, crust: Option<&Crust>, topping_count: usize) -> Money {
    let size_price = size.map(|s| s.price).unwrap_or_default();
    let crust_price = crust.map(|c| c.price).unwrap_or_default();

    size_price + crust_price + surcharge(topping_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(price_cents: i64) -> Size {
        Size {
            id: "large".to_string(),
            name: "Large".to_string(),
            price: Money::from_cents(price_cents),
            max_ingredients: 7,
        }
    }

    fn crust(price_cents: i64) -> Crust {
        Crust {
            id: "thick".to_string(),
            name: "Thick".to_string(),
            price: Money::from_cents(price_cents),
        }
    }

    #[test]
    fn test_surcharge_starts_after_third_topping() {
        assert_eq!(surcharge(0), Money::zero());
        assert_eq!(surcharge(3), Money::zero());
        assert_eq!(surcharge(4), Money::from_cents(50));
        assert_eq!(surcharge(7), Money::from_cents(200));
    }

    #[test]
    fn test_topping_surcharge_at() {
        assert!(topping_surcharge_at(0).is_zero());
        assert!(topping_surcharge_at(2).is_zero());
        assert_eq!(topping_surcharge_at(3), TOPPING_SURCHARGE);
        assert_eq!(topping_surcharge_at(9), TOPPING_SURCHARGE);
    }

    #[test]
    fn test_total_with_five_toppings() {
        let cost = total(Some(&size(800)), Some(&crust(150)), 5);
        assert_eq!(cost, Money::from_cents(1050));
    }

    #[test]
    fn test_total_without_selections() {
        assert_eq!(total(None, None, 0), Money::zero());
        assert_eq!(total(None, Some(&crust(150)), 4), Money::from_cents(200));
    }
}
