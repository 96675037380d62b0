//! # Rendering
//!
//! Draws the wizard as plain text from the configurator's state.
//!
//! ```text
//! == Pizza Builder ==
//!  1. Select Size > [2. Crust Type] > 3. Pick Ingredients > 4. Your Pizza
//!
//! Select Crust
//!   (*) thin    Thin (+$0.00)
//!   ( ) thick   Thick (+$1.50)
//!
//! Total: $8.00
//! [back] [next]
//! ```

use std::fmt::{self, Write};

use pizza_core::{CompletedOrder, Loadable, OrderConfigurator, OrderSummary, Step};

use crate::state::ConfigState;

pub const HELP: &str = "\
Commands:
  size <id>      choose a size
  crust <id>     choose a crust
  topping <id>   add or remove a topping (alias: toggle)
  next           go to the next step (finish / restart on the last steps)
  back           go to the previous step
  dismiss        close the error message
  reload         re-read the catalog files
  show           redraw the current step
  help           show this list
  quit           leave";

/// Draws the current step, the running total and any blocking message.
pub fn render_view(out: &mut impl Write, config: &ConfigState, order: &OrderConfigurator) -> fmt::Result {
    let state = order.state();

    writeln!(out, "== {} ==", config.store_name)?;
    render_stepper(out, state.step)?;
    writeln!(out)?;

    match state.step {
        Step::Size => render_sizes(out, config, order)?,
        Step::Crust => render_crusts(out, config, order)?,
        Step::Toppings => render_toppings(out, order)?,
        Step::Review => render_review(out, config, order)?,
    }

    writeln!(out)?;
    writeln!(out, "Total: {}", config.format_money(state.cost))?;

    if let Some(message) = &state.validation_error {
        writeln!(out, "! {} (type 'dismiss' to close)", message)?;
    }

    let back = if state.step.previous().is_some() { "[back] " } else { "" };
    writeln!(out, "{}[{}]", back, state.step.advance_label().to_lowercase())
}

fn render_stepper(out: &mut impl Write, current: Step) -> fmt::Result {
    let labels: Vec<String> = Step::ORDER
        .iter()
        .map(|step| {
            let label = format!("{}. {}", step.index() + 1, step.label());
            if *step == current {
                format!("[{}]", label)
            } else {
                label
            }
        })
        .collect();
    writeln!(out, " {}", labels.join(" > "))
}

/// Returns `true` when the list is ready; otherwise writes its status line.
fn render_status<T>(out: &mut impl Write, list: &Loadable<T>) -> Result<bool, fmt::Error> {
    match list {
        Loadable::Ready(_) => Ok(true),
        Loadable::Loading => {
            writeln!(out, "  Loading...")?;
            Ok(false)
        }
        Loadable::Failed(reason) => {
            writeln!(out, "  Failed: {}", reason)?;
            Ok(false)
        }
    }
}

fn radio(selected: bool) -> &'static str {
    if selected {
        "(*)"
    } else {
        "( )"
    }
}

fn render_sizes(out: &mut impl Write, config: &ConfigState, order: &OrderConfigurator) -> fmt::Result {
    writeln!(out, "Select Pizza Size")?;
    if !render_status(out, &order.catalog().sizes)? {
        return Ok(());
    }

    let chosen = order.state().selected_size.as_ref().map(|s| s.id.as_str());
    for size in order.catalog().sizes() {
        writeln!(
            out,
            "  {} {:<10} {} ({}, up to {} toppings)",
            radio(chosen == Some(size.id.as_str())),
            size.id,
            size.name,
            config.format_money(size.price),
            size.max_ingredients
        )?;
    }
    Ok(())
}

fn render_crusts(out: &mut impl Write, config: &ConfigState, order: &OrderConfigurator) -> fmt::Result {
    writeln!(out, "Select Crust")?;
    if !render_status(out, &order.catalog().crusts)? {
        return Ok(());
    }

    let chosen = order.state().selected_crust.as_ref().map(|c| c.id.as_str());
    for crust in order.catalog().crusts() {
        writeln!(
            out,
            "  {} {:<10} {} (+{})",
            radio(chosen == Some(crust.id.as_str())),
            crust.id,
            crust.name,
            config.format_money(crust.price)
        )?;
    }
    Ok(())
}

fn render_toppings(out: &mut impl Write, order: &OrderConfigurator) -> fmt::Result {
    let state = order.state();
    match state.ingredient_cap() {
        Some(cap) => writeln!(out, "Additional Toppings ({}/{})", state.selected_toppings.len(), cap)?,
        None => writeln!(out, "Additional Toppings (choose a size first)")?,
    }
    if !render_status(out, &order.catalog().toppings)? {
        return Ok(());
    }

    for topping in order.catalog().toppings() {
        let mark = if state.is_topping_selected(&topping.id) { "[x]" } else { "[ ]" };
        writeln!(out, "  {} {:<10} {}", mark, topping.id, topping.name)?;
    }
    Ok(())
}

fn render_review(out: &mut impl Write, config: &ConfigState, order: &OrderConfigurator) -> fmt::Result {
    if !render_status(out, &order.catalog().toppings)? {
        return Ok(());
    }

    let summary = order.summary();
    writeln!(out, "{}", pizza_title(&summary))?;
    for line in &summary.toppings {
        if line.surcharge.is_zero() {
            writeln!(out, "  + {}", line.name)?;
        } else {
            writeln!(
                out,
                "  + {} (+ {})",
                line.name,
                config.format_money(line.surcharge)
            )?;
        }
    }
    Ok(())
}

/// Headline of the review card, e.g. "Thin crust Large sized pizza".
///
/// Parts not chosen yet are left out.
pub fn pizza_title(summary: &OrderSummary) -> String {
    match (&summary.crust, &summary.size) {
        (Some(crust), Some(size)) => format!("{} crust {} sized pizza", crust.name, size.name),
        (None, Some(size)) => format!("{} sized pizza", size.name),
        (Some(crust), None) => format!("{} crust pizza", crust.name),
        (None, None) => "Your pizza".to_string(),
    }
}

/// Confirmation printed after the customer restarts from the review step.
pub fn render_completed(out: &mut impl Write, config: &ConfigState, order: &CompletedOrder) -> fmt::Result {
    writeln!(
        out,
        "Order {} confirmed at {}: {} for {}",
        order.order_id,
        order.completed_at.format("%H:%M:%S"),
        pizza_title(&order.summary),
        config.format_money(order.summary.cost)
    )
}
