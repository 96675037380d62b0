//! # Validation Module
//!
//! Rules a catalog list must satisfy before the loader marks it `Ready`.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sizes.json ──► parse ──► validate_sizes() ──► Loadable::Ready(sizes)   │
//! │                              │                                          │
//! │                              └── Err ──► Loadable::Failed(reason)       │
//! │                                                                         │
//! │  The configurator trusts Ready data: ids are unique and non-empty,      │
//! │  prices are never negative and capped at MAX_PRICE_CENTS.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pizza_core::validation::{validate_catalog_id, validate_price_cents};
//!
//! assert!(validate_catalog_id("size id", "large").is_ok());
//! assert!(validate_price_cents(-1).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Crust, Size, Topping};
use crate::{MAX_INGREDIENTS_LIMIT, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_ID_LEN: usize = 64;
const MAX_NAME_LEN: usize = 100;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a catalog id.
///
/// ## Rules
/// - Must not be empty (an empty id means "nothing selected")
/// - At most 64 characters
/// - No whitespace
pub fn validate_catalog_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_ID_LEN,
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a display name: non-blank, at most 100 characters.
pub fn validate_option_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price in cents against [`MAX_PRICE_CENTS`]. Zero is allowed
/// (a free crust).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a size's ingredient cap against [`MAX_INGREDIENTS_LIMIT`].
pub fn validate_max_ingredients(max: u32) -> ValidationResult<()> {
    if max > MAX_INGREDIENTS_LIMIT {
        return Err(ValidationError::OutOfRange {
            field: "maxIngredients".to_string(),
            min: 0,
            max: MAX_INGREDIENTS_LIMIT as i64,
        });
    }

    Ok(())
}

/// Validates that no id appears twice.
pub fn validate_unique_ids<'a>(
    field: &str,
    ids: impl IntoIterator<Item = &'a str>,
) -> ValidationResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::Duplicate {
                field: field.to_string(),
                value: id.to_string(),
            });
        }
    }

    Ok(())
}

fn validate_price(price: Money) -> ValidationResult<()> {
    validate_price_cents(price.cents())
}

// =============================================================================
// List Validators
// =============================================================================

/// Validates every size in a freshly loaded list.
pub fn validate_sizes(sizes: &[Size]) -> ValidationResult<()> {
    for size in sizes {
        validate_catalog_id("size id", &size.id)?;
        validate_option_name("size name", &size.name)?;
        validate_price(size.price)?;
        validate_max_ingredients(size.max_ingredients)?;
    }
    validate_unique_ids("size id", sizes.iter().map(|s| s.id.as_str()))
}

/// Validates every crust in a freshly loaded list.
pub fn validate_crusts(crusts: &[Crust]) -> ValidationResult<()> {
    for crust in crusts {
        validate_catalog_id("crust id", &crust.id)?;
        validate_option_name("crust name", &crust.name)?;
        validate_price(crust.price)?;
    }
    validate_unique_ids("crust id", crusts.iter().map(|c| c.id.as_str()))
}

/// Validates every topping in a freshly loaded list.
pub fn validate_toppings(toppings: &[Topping]) -> ValidationResult<()> {
    for topping in toppings {
        validate_catalog_id("topping id", &topping.id)?;
        validate_option_name("topping name", &topping.name)?;
    }
    validate_unique_ids("topping id", toppings.iter().map(|t| t.id.as_str()))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn topping(id: &str) -> Topping {
        Topping {
            id: id.to_string(),
            name: id.to_uppercase(),
            image: format!("{}.png", id),
        }
    }

    #[test]
    fn test_validate_catalog_id() {
        assert!(validate_catalog_id("id", "large").is_ok());
        assert!(validate_catalog_id("id", "thin-crust_2").is_ok());

        assert!(validate_catalog_id("id", "").is_err());
        assert!(validate_catalog_id("id", "extra large").is_err());
        assert!(validate_catalog_id("id", &"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_option_name() {
        assert!(validate_option_name("name", "Pepperoni").is_ok());
        assert!(validate_option_name("name", "   ").is_err());
        assert!(validate_option_name("name", &"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(800).is_ok());
        assert!(validate_price_cents(-50).is_err());
        assert!(validate_price_cents(MAX_PRICE_CENTS).is_ok());
        assert!(validate_price_cents(MAX_PRICE_CENTS + 1).is_err());
        assert!(validate_price_cents(i64::MAX / 2 + 1).is_err());
    }

    #[test]
    fn test_validate_max_ingredients() {
        assert!(validate_max_ingredients(0).is_ok());
        assert!(validate_max_ingredients(MAX_INGREDIENTS_LIMIT).is_ok());
        assert!(validate_max_ingredients(MAX_INGREDIENTS_LIMIT + 1).is_err());
    }

    #[test]
    fn test_validate_toppings_rejects_duplicates() {
        let toppings = vec![topping("ham"), topping("olives"), topping("ham")];
        let err = validate_toppings(&toppings).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Duplicate {
                field: "topping id".to_string(),
                value: "ham".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_sizes_rejects_negative_price() {
        let sizes = vec![Size {
            id: "small".to_string(),
            name: "Small".to_string(),
            price: Money::from_cents(-100),
            max_ingredients: 3,
        }];
        assert!(matches!(
            validate_sizes(&sizes),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_crusts_accepts_free_crust() {
        let crusts = vec![Crust {
            id: "thin".to_string(),
            name: "Thin".to_string(),
            price: Money::zero(),
        }];
        assert!(validate_crusts(&crusts).is_ok());
    }

    #[test]
    fn test_empty_lists_are_valid() {
        assert!(validate_sizes(&[]).is_ok());
        assert!(validate_crusts(&[]).is_ok());
        assert!(validate_toppings(&[]).is_ok());
    }
}
