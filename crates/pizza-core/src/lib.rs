//! # pizza-core: Pure Ordering Logic for Pizza Builder
//!
//! This crate is the **heart** of Pizza Builder: the guided
//! size → crust → toppings → review wizard, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Pizza Builder Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Front end (terminal app, or a web UI via ts-rs)    │   │
//! │  │    Stepper ──► Option lists ──► Topping grid ──► Review card    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ calls operations, reads state          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pizza-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │configurator │  │ validation│  │   │
//! │  │   │   Size    │  │   Money   │  │ Selection-  │  │  catalog  │  │   │
//! │  │   │   Step    │  │  pricing  │  │ State       │  │  rules    │  │   │
//! │  │   └───────────┘  └───────────┘  └─────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • SYNCHRONOUS                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │                    Catalog source (app)                          │   │
//! │  │              sizes.json, crusts.json, toppings.json              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog options, wizard steps, `Loadable`, `Catalog`
//! - [`money`] - Money type with integer arithmetic
//! - [`pricing`] - Size + crust + topping surcharge
//! - [`configurator`] - The ordering state machine
//! - [`validation`] - Catalog validation rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pizza_core::{Advance, Catalog, Crust, Money, OrderConfigurator, Size, Step};
//!
//! let catalog = Catalog::ready(
//!     vec![Size {
//!         id: "medium".into(),
//!         name: "Medium".into(),
//!         price: Money::from_cents(800),
//!         max_ingredients: 5,
//!     }],
//!     vec![Crust {
//!         id: "thick".into(),
//!         name: "Thick".into(),
//!         price: Money::from_cents(150),
//!     }],
//!     vec![],
//! );
//!
//! let mut order = OrderConfigurator::new(catalog);
//! assert_eq!(order.advance(), Advance::Blocked);
//!
//! order.select_size("medium").unwrap();
//! assert_eq!(order.advance(), Advance::Moved(Step::Crust));
//! assert_eq!(order.state().cost.to_string(), "$9.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod configurator;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use configurator::{Advance, CompletedOrder, OrderConfigurator, OrderSummary, SelectionState, ToppingLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of wizard steps (Size, Crust, Toppings, Review).
pub const STEP_COUNT: usize = 4;

/// Largest `maxIngredients` a catalog size may declare.
pub const MAX_INGREDIENTS_LIMIT: u32 = 50;

/// Largest price a catalog entry may carry ($1,000,000.00).
///
/// Keeps size + crust + surcharge far inside the i64 cent range.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// Shown when the customer tries to leave the size step without a size.
pub const SIZE_REQUIRED_MESSAGE: &str = "Please select pizza size before proceeding.";
