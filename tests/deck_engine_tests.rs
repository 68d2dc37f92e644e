//! Deck engine integration tests.
//!
//! These tests verify the deck rules through the engine's public surface:
//! - One copy per non-basic card, basic lands unlimited
//! - Commander designation and removal
//! - Grouped display order
//! - Price totals and text export

mod common;

use commander_deck::cards::{Card, CardId, Currency, Price};
use commander_deck::core::DeckConfig;
use commander_deck::deck::{DeckEngine, FilterView};
use commander_deck::storage::MemoryStore;
use proptest::prelude::*;

use common::*;

fn engine() -> DeckEngine {
    DeckEngine::new(DeckConfig::default(), MemoryStore::new())
}

fn names(engine: &DeckEngine) -> Vec<String> {
    engine.sort_order().iter().map(|c| c.name.clone()).collect()
}

// =============================================================================
// Copy Limits
// =============================================================================

/// Adding a non-basic card twice keeps one copy and reports the duplicate.
#[test]
fn test_singleton_rule() {
    let mut engine = engine();
    engine.add_card(sol_ring()).unwrap();

    let err = engine.add_card(sol_ring()).unwrap_err();
    assert_eq!(err.id, CardId::new("sol-1"));
    assert_eq!(engine.copies_of(&CardId::new("sol-1")), 1);
    assert_eq!(engine.len(), 1);
}

/// Basic lands can be added any number of times.
#[test]
fn test_basic_land_exemption() {
    let mut engine = engine();
    for _ in 0..7 {
        engine.add_card(forest()).unwrap();
    }
    assert_eq!(engine.copies_of(&CardId::new("forest-1")), 7);
}

/// Non-basic lands follow the one-copy rule.
#[test]
fn test_nonbasic_land_is_singleton() {
    let mut engine = engine();
    engine.add_card(command_tower()).unwrap();
    assert!(engine.add_card(command_tower()).is_err());
}

// =============================================================================
// Commander
// =============================================================================

/// The first legendary creature becomes commander; the next is a member.
#[test]
fn test_commander_designation() {
    let mut engine = engine();
    engine.add_card(forest()).unwrap();
    assert!(engine.add_card(ezuri()).unwrap().filter_changed);
    assert!(!engine.add_card(meren()).unwrap().filter_changed);

    assert_eq!(engine.commander().unwrap().id, CardId::new("ezuri-1"));
    assert_eq!(engine.copies_of(&CardId::new("meren-1")), 1);
    assert_eq!(engine.filter().view().colors.to_string(), "G");
}

/// Removing the commander clears it and turns the filter off.
#[test]
fn test_commander_removal() {
    let mut engine = engine();
    engine.add_card(ezuri()).unwrap();
    engine.add_card(meren()).unwrap();

    let update = engine.remove_card(&CardId::new("ezuri-1"));
    assert!(update.filter_changed);
    assert!(engine.commander().is_none());
    assert_eq!(engine.filter().view(), FilterView::default());

    // Meren stays an ordinary member
    assert_eq!(engine.sort_order()[0].name, "Meren of Clan Nel Toth");
}

/// After the commander leaves, the next legendary creature added takes over.
#[test]
fn test_new_commander_after_removal() {
    let mut engine = engine();
    engine.add_card(ezuri()).unwrap();
    engine.remove_card(&CardId::new("ezuri-1"));

    assert!(engine.add_card(meren()).unwrap().filter_changed);
    assert_eq!(engine.filter().view().colors.to_string(), "BG");
}

/// Removing an ordinary card leaves the filter alone.
#[test]
fn test_remove_member_keeps_filter() {
    let mut engine = engine();
    engine.add_card(ezuri()).unwrap();
    engine.add_card(elves()).unwrap();

    let update = engine.remove_card(&CardId::new("elves-1"));
    assert!(!update.filter_changed);
    assert!(engine.filter().is_active());
}

/// The filter passes only cards inside the commander's colors.
#[test]
fn test_filter_narrows_results() {
    let mut engine = engine();
    let bolt = Card::new("bolt-1", "Lightning Bolt", "Instant")
        .with_colors([commander_deck::cards::Color::Red]);

    assert!(engine.filter().allows(&bolt));
    engine.add_card(ezuri()).unwrap();
    assert!(!engine.filter().allows(&bolt));
    assert!(engine.filter().allows(&growth()));
    assert_eq!(engine.filter().query_clause().as_deref(), Some("id<=g"));
}

// =============================================================================
// Display Order
// =============================================================================

/// Groups follow the type precedence; ties keep insertion order.
#[test]
fn test_stable_grouped_sort() {
    let mut engine = engine();
    engine.add_card(Card::new("l1", "Land A", "Land")).unwrap();
    engine.add_card(Card::new("c1", "Creature A", "Creature — Elf")).unwrap();
    engine.add_card(Card::new("l2", "Land B", "Land")).unwrap();
    engine.add_card(Card::new("i1", "Instant A", "Instant")).unwrap();

    assert_eq!(names(&engine), vec!["Creature A", "Instant A", "Land A", "Land B"]);
}

/// The commander always leads, even when added last.
#[test]
fn test_commander_first() {
    let mut engine = engine();
    engine.add_card(elves()).unwrap();
    engine.add_card(sol_ring()).unwrap();
    engine.add_card(ezuri()).unwrap();

    assert_eq!(
        names(&engine),
        vec!["Ezuri, Renegade Leader", "Llanowar Elves", "Sol Ring"]
    );

    let headings: Vec<_> = engine.sections().into_iter().map(|s| s.heading).collect();
    assert_eq!(headings, vec!["Commander", "Creatures", "Artifacts"]);
}

// =============================================================================
// Price and Export
// =============================================================================

/// The total is a sum over all cards, primary currency first.
#[test]
fn test_aggregate_price_is_a_sum() {
    let mut engine = engine();
    engine
        .add_card(Card::new("a", "A", "Instant").with_price_str(Currency::Eur, "1.50").unwrap())
        .unwrap();
    engine
        .add_card(Card::new("b", "B", "Sorcery").with_price_str(Currency::Usd, "2.25").unwrap())
        .unwrap();

    assert_eq!(engine.aggregate_price(), Price::from_cents(375));
    assert_eq!(engine.aggregate_price().to_string(), "3.75");
}

/// Unpriced cards contribute nothing; the commander counts like any card.
#[test]
fn test_aggregate_price_includes_commander() {
    let mut engine = engine();
    engine
        .add_card(ezuri().with_price_str(Currency::Eur, "0.40").unwrap())
        .unwrap();
    engine.add_card(forest()).unwrap();
    engine.add_card(sol_ring()).unwrap();

    assert_eq!(engine.aggregate_price().to_string(), "2.39");
}

/// Huge catalog prices cap the total instead of overflowing.
#[test]
fn test_aggregate_price_saturates() {
    let mut engine = engine();
    for id in ["a", "b"] {
        engine
            .add_card(
                Card::new(id, id, "Artifact")
                    .with_price_str(Currency::Eur, "90000000000000000")
                    .unwrap(),
            )
            .unwrap();
    }

    assert_eq!(engine.aggregate_price(), Price::MAX);
}

/// Currency preference comes from the configuration.
#[test]
fn test_configured_currency_preference() {
    let config = DeckConfig::new().with_currencies(Currency::Usd, Currency::Eur);
    let mut engine = DeckEngine::new(config, MemoryStore::new());
    let card = Card::new("a", "A", "Instant")
        .with_price_str(Currency::Eur, "1.00")
        .unwrap()
        .with_price_str(Currency::Usd, "3.00")
        .unwrap();
    engine.add_card(card).unwrap();

    assert_eq!(engine.aggregate_price().to_string(), "3.00");
    assert_eq!(engine.total_price_label(), "3.00$");
}

/// Export counts by name, in display order, commander included.
#[test]
fn test_export_text() {
    let mut engine = engine();
    engine.add_card(forest()).unwrap();
    engine.add_card(sol_ring()).unwrap();
    engine.add_card(forest()).unwrap();
    engine.add_card(ezuri()).unwrap();

    assert_eq!(
        engine.export_text(),
        "1 Ezuri, Renegade Leader\n1 Sol Ring\n2 Forest\n"
    );
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// However cards are added, no non-basic ID appears twice and at most
    /// one commander exists.
    #[test]
    fn prop_deck_invariants(picks in proptest::collection::vec(0usize..7, 0..40)) {
        let pool = [forest(), command_tower(), sol_ring(), ezuri(), meren(), elves(), growth()];
        let mut engine = engine();
        for pick in picks {
            let card = pool[pick].clone();
            let was_present = engine.copies_of(&card.id) > 0;
            let result = engine.add_card(card.clone());
            prop_assert_eq!(result.is_err(), was_present && !card.is_basic_land());
        }

        for card in engine.sort_order().iter().filter(|c| !c.is_basic_land()) {
            prop_assert_eq!(engine.copies_of(&card.id), 1);
        }
        prop_assert_eq!(engine.filter().is_active(), engine.commander().is_some());
    }

    /// Cards of one group keep the order they were added in.
    #[test]
    fn prop_sort_is_stable(kinds in proptest::collection::vec(0usize..3, 1..30)) {
        let types = ["Land", "Creature — Elf", "Instant"];
        let mut engine = engine();
        for (i, kind) in kinds.iter().enumerate() {
            let name = format!("card-{i:03}");
            engine.add_card(Card::new(name.clone(), name, types[*kind])).unwrap();
        }

        let order = engine.sort_order();
        for pair in order.iter().collect::<Vec<_>>().windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.type_line == b.type_line {
                prop_assert!(a.name < b.name);
            }
        }
    }
}
