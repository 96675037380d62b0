//! # Domain Types
//!
//! Catalog options, wizard steps and the catalog itself.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Size       │   │      Crust      │   │     Topping     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  name           │   │  name           │       │
//! │  │  price          │   │  price          │   │  image (opaque) │       │
//! │  │  max_ingredients│   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────────────────────────┐    │
//! │  │      Step       │   │  Catalog = Loadable<Vec<Size>>           │    │
//! │  │  Size → Crust → │   │          + Loadable<Vec<Crust>>          │    │
//! │  │  Toppings →     │   │          + Loadable<Vec<Topping>>        │    │
//! │  │  Review → Size  │   └──────────────────────────────────────────┘    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::STEP_COUNT;

// =============================================================================
// Catalog Options
// =============================================================================

/// A pizza size offered by the catalog.
///
/// Copied into the selection when chosen, so later catalog refreshes never
/// change a size the customer already picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Size {
    pub id: String,
    pub name: String,
    pub price: Money,
    /// Upper bound on the number of toppings for this size.
    pub max_ingredients: u32,
}

/// A crust (thickness) option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Crust {
    pub id: String,
    pub name: String,
    pub price: Money,
}

/// A topping option.
///
/// Toppings carry no price: they are charged through the flat
/// surcharge in [`crate::pricing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Topping {
    pub id: String,
    pub name: String,
    /// Image reference handed through to the front end untouched.
    pub image: String,
}

// =============================================================================
// Step
// =============================================================================

/// One stage of the ordering wizard.
///
/// ## Sequence
/// ```text
/// Size(0) ──► Crust(1) ──► Toppings(2) ──► Review(3) ──┐
///   ▲                                                 │
///   └──────────────── cycle reset ◄───────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Step {
    #[default]
    Size,
    Crust,
    Toppings,
    Review,
}

impl Step {
    /// The canonical order of steps.
    pub const ORDER: [Step; STEP_COUNT] = [Step::Size, Step::Crust, Step::Toppings, Step::Review];

    /// Zero-based position of this step.
    pub const fn index(self) -> usize {
        match self {
            Step::Size => 0,
            Step::Crust => 1,
            Step::Toppings => 2,
            Step::Review => 3,
        }
    }

    /// Step at the given position, if any.
    pub fn from_index(index: usize) -> Option<Step> {
        Self::ORDER.get(index).copied()
    }

    /// The following step, `None` at [`Step::Review`].
    pub fn next(self) -> Option<Step> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, `None` at [`Step::Size`].
    pub fn previous(self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Title shown in the progress indicator.
    pub const fn label(self) -> &'static str {
        match self {
            Step::Size => "Select Size",
            Step::Crust => "Crust Type",
            Step::Toppings => "Pick Ingredients",
            Step::Review => "Your Pizza",
        }
    }

    /// Caption of the forward button while on this step.
    pub const fn advance_label(self) -> &'static str {
        match self {
            Step::Size | Step::Crust => "Next",
            Step::Toppings => "Finish",
            Step::Review => "Restart",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Loadable
// =============================================================================

/// Load condition of one catalog list.
///
/// The core only acts on `Ready` data. `Loading` and a `Ready` empty list
/// behave the same (nothing to act on); `Failed` additionally means "skip
/// default selection this time".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Loadable<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Loadable<T> {
    /// The loaded value, if ready.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure reason, if the load failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Loadable::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Loading
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Loadable<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Loadable::Ready(value),
            Err(err) => Loadable::Failed(err.to_string()),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Everything a customer can choose from.
///
/// Supplied by the catalog source and replaced wholesale on each refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Catalog {
    pub sizes: Loadable<Vec<Size>>,
    pub crusts: Loadable<Vec<Crust>>,
    pub toppings: Loadable<Vec<Topping>>,
}

impl Catalog {
    /// A catalog with all three lists loaded.
    pub fn ready(sizes: Vec<Size>, crusts: Vec<Crust>, toppings: Vec<Topping>) -> Self {
        Catalog {
            sizes: Loadable::Ready(sizes),
            crusts: Loadable::Ready(crusts),
            toppings: Loadable::Ready(toppings),
        }
    }

    /// Loaded sizes; empty while loading or after a failure.
    pub fn sizes(&self) -> &[Size] {
        self.sizes.ready().map(Vec::as_slice).unwrap_or_default()
    }

    /// Loaded crusts; empty while loading or after a failure.
    pub fn crusts(&self) -> &[Crust] {
        self.crusts.ready().map(Vec::as_slice).unwrap_or_default()
    }

    /// Loaded toppings; empty while loading or after a failure.
    pub fn toppings(&self) -> &[Topping] {
        self.toppings.ready().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn find_size(&self, id: &str) -> Option<&Size> {
        self.sizes().iter().find(|size| size.id == id)
    }

    pub fn find_crust(&self, id: &str) -> Option<&Crust> {
        self.crusts().iter().find(|crust| crust.id == id)
    }

    /// First crust in catalog order, used as the default choice.
    pub fn first_crust(&self) -> Option<&Crust> {
        self.crusts().first()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation() {
        assert_eq!(Step::Size.next(), Some(Step::Crust));
        assert_eq!(Step::Toppings.next(), Some(Step::Review));
        assert_eq!(Step::Review.next(), None);

        assert_eq!(Step::Size.previous(), None);
        assert_eq!(Step::Review.previous(), Some(Step::Toppings));
    }

    #[test]
    fn test_step_index_round_trip() {
        for (i, step) in Step::ORDER.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
        assert_eq!(Step::from_index(STEP_COUNT), None);
    }

    #[test]
    fn test_step_labels() {
        assert_eq!(Step::Size.to_string(), "Select Size");
        assert_eq!(Step::Review.label(), "Your Pizza");
        assert_eq!(Step::Crust.advance_label(), "Next");
        assert_eq!(Step::Toppings.advance_label(), "Finish");
        assert_eq!(Step::Review.advance_label(), "Restart");
    }

    #[test]
    fn test_loadable_default_and_access() {
        let loading: Loadable<Vec<Crust>> = Loadable::default();
        assert_eq!(loading, Loadable::Loading);
        assert!(loading.ready().is_none());

        let failed: Loadable<Vec<Crust>> = Loadable::Failed("boom".to_string());
        assert_eq!(failed.failure(), Some("boom"));
    }

    #[test]
    fn test_loadable_from_result() {
        let ok: Loadable<u8> = Ok::<u8, String>(3).into();
        assert_eq!(ok, Loadable::Ready(3));

        let err: Loadable<u8> = Err::<u8, String>("missing".to_string()).into();
        assert_eq!(err, Loadable::Failed("missing".to_string()));
    }

    #[test]
    fn test_catalog_lookups_ignore_unready_lists() {
        let mut catalog = Catalog::default();
        assert!(catalog.sizes().is_empty());
        assert!(catalog.first_crust().is_none());

        catalog.crusts = Loadable::Ready(vec![Crust {
            id: "thin".to_string(),
            name: "Thin".to_string(),
            price: Money::from_cents(100),
        }]);
        assert_eq!(catalog.first_crust().map(|c| c.id.as_str()), Some("thin"));
        assert!(catalog.find_crust("thick").is_none());
    }

    #[test]
    fn test_loadable_serializes_with_status_tag() {
        let loadable: Loadable<Vec<u8>> = Loadable::Failed("timeout".to_string());
        let json = serde_json::to_string(&loadable).unwrap();
        assert_eq!(json, r#"{"status":"failed","value":"timeout"}"#);
    }
}
