//! # Order Configurator
//!
//! The ordering wizard as an explicit state machine.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configurator Operations                              │
//! │                                                                         │
//! │  User Action            Operation              State Change             │
//! │  ───────────            ─────────              ────────────             │
//! │                                                                         │
//! │  Pick a size ─────────► select_size() ───────► selected_size            │
//! │  Pick a crust ────────► select_crust() ──────► selected_crust           │
//! │  Click a topping ─────► toggle_topping() ────► topping_flags,           │
//! │                                                selected_toppings        │
//! │  Next / Finish ───────► advance() ───────────► step, cost               │
//! │  Restart ─────────────► advance() ───────────► cycle reset              │
//! │  Back ────────────────► retreat() ───────────► step                     │
//! │  Close error ─────────► dismiss_error() ─────► validation_error         │
//! │  Catalog (re)loaded ──► refresh_catalog() ───► default crust, flags     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `selected_toppings` is exactly the catalog toppings whose flag is set,
//!   in catalog order.
//! - Toppings can only be chosen once a size is selected, and the number of
//!   set flags never exceeds that size's ingredient cap.
//! - `step` only moves through [`OrderConfigurator::advance`] and
//!   [`OrderConfigurator::retreat`].
//! - `cost` is recomputed from scratch on every forward move.
//!
//! A rejected operation returns a [`CoreError`] and leaves the state untouched.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing;
use crate::types::{Catalog, Crust, Loadable, Size, Step, Topping};
use crate::SIZE_REQUIRED_MESSAGE;

// =============================================================================
// Selection State
// =============================================================================

/// The order in progress.
///
/// Read-only outside this module: the configurator hands out `&SelectionState`
/// and every change goes through its operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SelectionState {
    /// Current wizard step.
    pub step: Step,

    /// Snapshot of the chosen size, `None` until the customer picks one.
    pub selected_size: Option<Size>,

    /// Snapshot of the chosen crust.
    pub selected_crust: Option<Crust>,

    /// Selection flag per topping id. Empty until toppings first load.
    pub topping_flags: BTreeMap<String, bool>,

    /// Toppings whose flag is set, in catalog order.
    pub selected_toppings: Vec<Topping>,

    /// Price as of the last forward step.
    pub cost: Money,

    /// Message blocking the current step, shown until dismissed.
    pub validation_error: Option<String>,
}

impl SelectionState {
    /// Whether the topping with `id` is currently selected.
    pub fn is_topping_selected(&self, id: &str) -> bool {
        self.topping_flags.get(id).copied().unwrap_or(false)
    }

    /// Number of set topping flags.
    pub fn selected_flag_count(&self) -> usize {
        count_selected(&self.topping_flags)
    }

    /// Topping cap of the selected size; `None` until a size is chosen.
    pub fn ingredient_cap(&self) -> Option<u32> {
        self.selected_size.as_ref().map(|size| size.max_ingredients)
    }
}

fn count_selected(flags: &BTreeMap<String, bool>) -> usize {
    flags.values().filter(|selected| **selected).count()
}

/// Catalog toppings whose flag is set, keeping catalog order.
fn project_toppings(catalog: &Catalog, flags: &BTreeMap<String, bool>) -> Vec<Topping> {
    catalog
        .toppings()
        .iter()
        .filter(|topping| flags.get(&topping.id).copied().unwrap_or(false))
        .cloned()
        .collect()
}

// =============================================================================
// Summaries
// =============================================================================

/// One topping line on the review screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ToppingLine {
    pub name: String,
    /// Zero for the first three toppings, the surcharge after that.
    pub surcharge: Money,
}

/// What the review step shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderSummary {
    pub size: Option<Size>,
    pub crust: Option<Crust>,
    pub toppings: Vec<ToppingLine>,
    pub cost: Money,
}

/// A pizza the customer confirmed from the review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CompletedOrder {
    #[ts(as = "String")]
    pub order_id: Uuid,
    pub summary: OrderSummary,
    #[ts(as = "String")]
    pub completed_at: DateTime<Utc>,
}

/// Result of [`OrderConfigurator::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The step gate refused; see `validation_error`.
    Blocked,
    /// Moved forward to this step.
    Moved(Step),
    /// Review was confirmed; the state has been reset to a new cycle.
    Completed(CompletedOrder),
}

// =============================================================================
// Order Configurator
// =============================================================================

/// Owns one ordering session: the catalog it was given and the selection.
#[derive(Debug, Clone, Default)]
pub struct OrderConfigurator {
    catalog: Catalog,
    state: SelectionState,
}

impl OrderConfigurator {
    /// Creates a configurator with an empty selection and applies the
    /// catalog defaults (first crust, topping flags).
    pub fn new(catalog: Catalog) -> Self {
        let mut configurator = OrderConfigurator::default();
        configurator.refresh_catalog(catalog);
        configurator
    }

    /// Current selection, for rendering.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Catalog the selection is made from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shorthand for `state().step`.
    pub fn step(&self) -> Step {
        self.state.step
    }

    /// Replaces the catalog and applies first-load defaults.
    ///
    /// ## Defaults
    /// - Crusts ready, non-empty, no crust chosen → choose the first crust.
    /// - Toppings ready, non-empty, no flags yet → one unset flag per topping.
    ///
    /// Both run at most once: a refetch never overrides a choice in progress.
    /// `Loading` and `Failed` lists are skipped.
    pub fn refresh_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;

        if self.state.selected_crust.is_none() {
            if let Some(crust) = self.catalog.first_crust() {
                debug!(crust = %crust.id, "Default crust selected");
                self.state.selected_crust = Some(crust.clone());
            }
        }

        if self.state.topping_flags.is_empty() {
            if let Loadable::Ready(toppings) = &self.catalog.toppings {
                self.state.topping_flags = toppings
                    .iter()
                    .map(|topping| (topping.id.clone(), false))
                    .collect();
                debug!(count = toppings.len(), "Topping flags initialized");
            }
        }

        self.state.selected_toppings = project_toppings(&self.catalog, &self.state.topping_flags);
    }

    /// Chooses a size by id.
    ///
    /// ## Errors
    /// - [`CoreError::UnknownSize`] if the id is not in the loaded sizes.
    /// - [`CoreError::SizeTooSmall`] if the size cannot hold the toppings
    ///   already selected.
    pub fn select_size(&mut self, id: &str) -> CoreResult<()> {
        let size = self
            .catalog
            .find_size(id)
            .ok_or_else(|| CoreError::UnknownSize(id.to_string()))?;

        let selected = self.state.selected_flag_count();
        if selected > size.max_ingredients as usize {
            debug!(size = %size.id, selected, "Size rejected: too many toppings");
            return Err(CoreError::SizeTooSmall {
                size: size.name.clone(),
                max: size.max_ingredients,
                selected,
            });
        }

        debug!(size = %size.id, "Size selected");
        self.state.selected_size = Some(size.clone());
        Ok(())
    }

    /// Chooses a crust by id.
    ///
    /// ## Errors
    /// [`CoreError::UnknownCrust`] if the id is not in the loaded crusts.
    pub fn select_crust(&mut self, id: &str) -> CoreResult<()> {
        let crust = self
            .catalog
            .find_crust(id)
            .ok_or_else(|| CoreError::UnknownCrust(id.to_string()))?;

        debug!(crust = %crust.id, "Crust selected");
        self.state.selected_crust = Some(crust.clone());
        Ok(())
    }

    /// Flips one topping and returns its new flag.
    ///
    /// Cost is not touched here; it is repriced on the next [`advance`].
    ///
    /// ## Errors
    /// - [`CoreError::UnknownTopping`] if the id has no flag.
    /// - [`CoreError::SizeNotSelected`] if no size has been chosen yet.
    /// - [`CoreError::ToppingLimitReached`] if turning it on would exceed the
    ///   ingredient cap.
    ///
    /// [`advance`]: OrderConfigurator::advance
    pub fn toggle_topping(&mut self, id: &str) -> CoreResult<bool> {
        let current = *self
            .state
            .topping_flags
            .get(id)
            .ok_or_else(|| CoreError::UnknownTopping(id.to_string()))?;

        let cap = self.state.ingredient_cap().ok_or(CoreError::SizeNotSelected)?;

        let mut flags = self.state.topping_flags.clone();
        flags.insert(id.to_string(), !current);

        if count_selected(&flags) > cap as usize {
            debug!(topping = id, cap, "Topping rejected: ingredient cap reached");
            return Err(CoreError::ToppingLimitReached { max: cap });
        }

        self.state.selected_toppings = project_toppings(&self.catalog, &flags);
        self.state.topping_flags = flags;
        debug!(topping = id, selected = !current, "Topping toggled");
        Ok(!current)
    }

    /// Moves forward one step.
    ///
    /// ## Behavior
    /// ```text
    /// Size, no size chosen ──► stays on Size, validation_error set ─► Blocked
    /// Size/Crust/Toppings ───► next step, cost repriced ────────────► Moved
    /// Review ────────────────► cycle reset, back to Size ───────────► Completed
    /// ```
    ///
    /// A previous validation error is not cleared by a successful move;
    /// only [`dismiss_error`](OrderConfigurator::dismiss_error) clears it.
    pub fn advance(&mut self) -> Advance {
        let step = self.state.step;

        if step == Step::Size && self.state.selected_size.is_none() {
            debug!("Advance blocked: no size selected");
            self.state.validation_error = Some(SIZE_REQUIRED_MESSAGE.to_string());
            return Advance::Blocked;
        }

        match step.next() {
            Some(next) => {
                self.state.step = next;
                self.compute_cost();
                debug!(step = ?next, cost = %self.state.cost, "Advanced");
                Advance::Moved(next)
            }
            None => {
                let order = CompletedOrder {
                    order_id: Uuid::new_v4(),
                    summary: self.summary(),
                    completed_at: Utc::now(),
                };
                self.reset_cycle();
                debug!(order_id = %order.order_id, "Order completed, wizard restarted");
                Advance::Completed(order)
            }
        }
    }

    /// Moves back one step. Does nothing on the first step.
    ///
    /// Selections and cost are left as they are.
    pub fn retreat(&mut self) -> Step {
        if let Some(previous) = self.state.step.previous() {
            self.state.step = previous;
            debug!(step = ?previous, "Retreated");
        }
        self.state.step
    }

    pub fn dismiss_error(&mut self) {
        self.state.validation_error = None;
    }

    /// What the current selection would cost, without storing it.
    pub fn pending_cost(&self) -> Money {
        pricing::total(
            self.state.selected_size.as_ref(),
            self.state.selected_crust.as_ref(),
            self.state.selected_toppings.len(),
        )
    }

    /// Review-screen view of the selection, priced at the stored cost.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            size: self.state.selected_size.clone(),
            crust: self.state.selected_crust.clone(),
            toppings: self
                .state
                .selected_toppings
                .iter()
                .enumerate()
                .map(|(position, topping)| ToppingLine {
                    name: topping.name.clone(),
                    surcharge: pricing::topping_surcharge_at(position),
                })
                .collect(),
            cost: self.state.cost,
        }
    }

    fn compute_cost(&mut self) {
        self.state.cost = self.pending_cost();
    }

    /// Start of a new cycle: toppings cleared, crust back to the catalog
    /// default, cost zero, step Size. The size is kept.
    fn reset_cycle(&mut self) {
        for selected in self.state.topping_flags.values_mut() {
            *selected = false;
        }
        self.state.selected_toppings.clear();
        self.state.selected_crust = self.catalog.first_crust().cloned();
        self.state.cost = Money::zero();
        self.state.step = Step::Size;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
