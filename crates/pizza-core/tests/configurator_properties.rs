//! Property tests for the ordering wizard.
//!
//! Random operation sequences are driven against one configurator and the
//! invariants are checked after every step.

use pizza_core::{Advance, Catalog, Crust, Money, OrderConfigurator, Size, Step, Topping};
use proptest::prelude::*;

const TOPPING_IDS: [&str; 8] = [
    "ham", "olives", "mushrooms", "onions", "peppers", "bacon", "corn", "basil",
];

fn catalog() -> Catalog {
    Catalog::ready(
        vec![
            Size {
                id: "small".to_string(),
                name: "Small".to_string(),
                price: Money::from_cents(600),
                max_ingredients: 3,
            },
            Size {
                id: "medium".to_string(),
                name: "Medium".to_string(),
                price: Money::from_cents(800),
                max_ingredients: 5,
            },
            Size {
                id: "large".to_string(),
                name: "Large".to_string(),
                price: Money::from_cents(1000),
                max_ingredients: 7,
            },
        ],
        vec![
            Crust {
                id: "thin".to_string(),
                name: "Thin".to_string(),
                price: Money::zero(),
            },
            Crust {
                id: "thick".to_string(),
                name: "Thick".to_string(),
                price: Money::from_cents(150),
            },
        ],
        TOPPING_IDS
            .iter()
            .map(|id| Topping {
                id: id.to_string(),
                name: id.to_string(),
                image: format!("{}.png", id),
            })
            .collect(),
    )
}

#[derive(Debug, Clone)]
enum Op {
    SelectSize(usize),
    SelectCrust(usize),
    Toggle(usize),
    Advance,
    Retreat,
    Dismiss,
    Refresh,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..4).prop_map(Op::SelectSize),
        (0usize..3).prop_map(Op::SelectCrust),
        (0usize..TOPPING_IDS.len()).prop_map(Op::Toggle),
        Just(Op::Advance),
        Just(Op::Retreat),
        Just(Op::Dismiss),
        Just(Op::Refresh),
    ]
}

fn apply(configurator: &mut OrderConfigurator, op: &Op) {
    // Rejections are part of the exercise; the invariants must hold either way.
    match op {
        Op::SelectSize(i) => {
            let id = ["small", "medium", "large", "family"][*i];
            let _ = configurator.select_size(id);
        }
        Op::SelectCrust(i) => {
            let id = ["thin", "thick", "stuffed"][*i];
            let _ = configurator.select_crust(id);
        }
        Op::Toggle(i) => {
            let _ = configurator.toggle_topping(TOPPING_IDS[*i]);
        }
        Op::Advance => {
            configurator.advance();
        }
        Op::Retreat => {
            configurator.retreat();
        }
        Op::Dismiss => configurator.dismiss_error(),
        Op::Refresh => configurator.refresh_catalog(catalog()),
    }
}

fn assert_invariants(configurator: &OrderConfigurator) {
    let state = configurator.state();

    assert!(state.step.index() < pizza_core::STEP_COUNT);
    assert!(!state.cost.is_negative());

    let expected: Vec<&str> = TOPPING_IDS
        .iter()
        .copied()
        .filter(|id| state.is_topping_selected(id))
        .collect();
    let actual: Vec<&str> = state.selected_toppings.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(actual, expected);

    match state.ingredient_cap() {
        Some(cap) => assert!(state.selected_flag_count() <= cap as usize),
        None => assert_eq!(state.selected_flag_count(), 0),
    }
}

proptest! {
    #[test]
    fn invariants_hold_for_any_operation_sequence(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let mut configurator = OrderConfigurator::new(catalog());
        for op in &ops {
            apply(&mut configurator, op);
            assert_invariants(&configurator);
        }
    }

    #[test]
    fn any_size_chosen_first_opens_the_crust_step(
        size in prop::sample::select(vec!["small", "medium", "large"]),
        toggles in prop::collection::vec(0usize..TOPPING_IDS.len(), 0..10),
    ) {
        let mut configurator = OrderConfigurator::new(catalog());
        for i in toggles {
            let _ = configurator.toggle_topping(TOPPING_IDS[i]);
        }

        prop_assert!(configurator.select_size(size).is_ok());
        prop_assert_eq!(configurator.advance(), Advance::Moved(Step::Crust));
    }

    #[test]
    fn step_stays_in_bounds(moves in prop::collection::vec(any::<bool>(), 0..60)) {
        let mut configurator = OrderConfigurator::new(catalog());
        configurator.select_size("medium").unwrap();

        for forward in moves {
            if forward {
                configurator.advance();
            } else {
                configurator.retreat();
            }
            prop_assert!(configurator.step().index() <= Step::Review.index());
        }
    }

    #[test]
    fn projection_matches_flags(toggles in prop::collection::vec(0usize..TOPPING_IDS.len(), 0..40)) {
        let mut configurator = OrderConfigurator::new(catalog());
        configurator.select_size("large").unwrap();

        for i in toggles {
            let _ = configurator.toggle_topping(TOPPING_IDS[i]);
        }
        assert_invariants(&configurator);
    }
}

#[test]
fn five_toppings_on_medium_thick_cost_ten_fifty() {
    let mut configurator = OrderConfigurator::new(catalog());
    configurator.select_size("medium").unwrap();
    configurator.advance();
    configurator.select_crust("thick").unwrap();
    configurator.advance();
    for id in ["ham", "olives", "mushrooms", "onions", "peppers"] {
        configurator.toggle_topping(id).unwrap();
    }

    assert_eq!(configurator.advance(), Advance::Moved(Step::Review));
    assert_eq!(configurator.state().cost, Money::from_cents(1050));
}

#[test]
fn sixth_topping_is_refused_on_five_topping_size() {
    let mut configurator = OrderConfigurator::new(catalog());
    configurator.select_size("medium").unwrap();
    for id in ["ham", "olives", "mushrooms", "onions", "peppers"] {
        configurator.toggle_topping(id).unwrap();
    }

    assert!(configurator.toggle_topping("bacon").is_err());
    let selected: Vec<&str> = configurator
        .state()
        .selected_toppings
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(selected, vec!["ham", "olives", "mushrooms", "onions", "peppers"]);
}

#[test]
fn full_cycle_keeps_size_and_restores_defaults() {
    let mut configurator = OrderConfigurator::new(catalog());
    configurator.select_size("large").unwrap();
    configurator.advance();
    configurator.select_crust("thick").unwrap();
    configurator.advance();
    configurator.toggle_topping("corn").unwrap();
    configurator.advance();

    match configurator.advance() {
        Advance::Completed(order) => {
            assert_eq!(order.summary.crust.map(|c| c.name), Some("Thick".to_string()));
            assert_eq!(order.summary.cost, Money::from_cents(1150));
        }
        other => panic!("expected completed order, got {:?}", other),
    }

    let state = configurator.state();
    assert_eq!(state.step, Step::Size);
    assert_eq!(state.selected_size.as_ref().map(|s| s.id.as_str()), Some("large"));
    assert_eq!(state.selected_crust.as_ref().map(|c| c.id.as_str()), Some("thin"));
    assert!(state.selected_toppings.is_empty());
    assert!(state.cost.is_zero());
}

#[test]
fn catalog_refresh_is_idempotent_for_user_toggles() {
    let mut configurator = OrderConfigurator::new(catalog());
    configurator.select_size("large").unwrap();
    configurator.toggle_topping("basil").unwrap();
    configurator.toggle_topping("ham").unwrap();
    let flags = configurator.state().topping_flags.clone();

    configurator.refresh_catalog(catalog());

    assert_eq!(configurator.state().topping_flags, flags);
}
