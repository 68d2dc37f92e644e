//! Display ordering.
//!
//! The deck is shown commander first, then grouped by primary type in a
//! fixed precedence. Primary types missing from the table follow every
//! listed type, in the order they first appear. Within a group cards keep
//! the order they were added.

use im::Vector;
use rustc_hash::FxHashMap;

use super::state::CommanderSlot;
use crate::cards::{primary_type, Card};

/// Group precedence, first to last.
pub const TYPE_PRECEDENCE: [&str; 8] = [
    "Commander",
    "Creature",
    "Instant",
    "Sorcery",
    "Enchantment",
    "Artifact",
    "Land",
    "Battle",
];

/// Heading of the commander's section.
pub const COMMANDER_HEADING: &str = "Commander";

/// Position of a primary type in `TYPE_PRECEDENCE`.
#[must_use]
pub fn type_rank(primary: &str) -> Option<usize> {
    TYPE_PRECEDENCE.iter().position(|t| *t == primary)
}

/// Stable grouped order of `cards`.
///
/// The first entry carrying the commander's ID leads; everything else is
/// ordered by group with ties kept in their current relative order.
#[must_use]
pub fn sort_cards(cards: &Vector<Card>, commander: &CommanderSlot) -> Vector<Card> {
    let commander_index = commander
        .id()
        .and_then(|id| cards.iter().position(|card| &card.id == id));

    let mut unlisted: FxHashMap<&str, usize> = FxHashMap::default();
    let mut keyed: Vec<((usize, usize), &Card)> = Vec::with_capacity(cards.len());

    for (index, card) in cards.iter().enumerate() {
        if Some(index) == commander_index {
            continue;
        }
        let primary = card.primary_type();
        let key = match type_rank(primary) {
            Some(rank) => (rank, 0),
            None => {
                let next = unlisted.len();
                (TYPE_PRECEDENCE.len(), *unlisted.entry(primary).or_insert(next))
            }
        };
        keyed.push((key, card));
    }

    keyed.sort_by_key(|(key, _)| *key);

    let mut sorted = Vector::new();
    if let Some(index) = commander_index {
        sorted.push_back(cards[index].clone());
    }
    sorted.extend(keyed.into_iter().map(|(_, card)| card.clone()));
    sorted
}

/// A headed group of the display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckSection {
    /// `"Commander"`, or the primary type pluralized (`"Creatures"`).
    pub heading: String,
    pub cards: Vec<Card>,
}

/// Split an already sorted deck into headed sections.
#[must_use]
pub fn sections(sorted: &Vector<Card>, commander: &CommanderSlot) -> Vec<DeckSection> {
    let mut result: Vec<DeckSection> = Vec::new();
    let mut rest = sorted.iter();

    if let (Some(id), Some(first)) = (commander.id(), sorted.front()) {
        if &first.id == id {
            result.push(DeckSection {
                heading: COMMANDER_HEADING.to_string(),
                cards: vec![first.clone()],
            });
            rest.next();
        }
    }

    let mut current: Option<&str> = None;
    for card in rest {
        let primary = primary_type(&card.type_line);
        if current == Some(primary) {
            if let Some(section) = result.last_mut() {
                section.cards.push(card.clone());
                continue;
            }
        }
        current = Some(primary);
        result.push(DeckSection {
            heading: format!("{primary}s"),
            cards: vec![card.clone()],
        });
    }
    result
}
