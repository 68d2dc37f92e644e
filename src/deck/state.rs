//! Deck state: the card list and the commander designation.
//!
//! `Deck` owns the legality rules and nothing else - no filter, no
//! storage, no logging. Every mutation leaves the entries in display order.
//!
//! ## Invariants
//!
//! - At most one commander, recorded once in `CommanderSlot`
//! - At most one copy of any non-basic-land card ID
//! - Basic lands have no copy limit
//!
//! Entries live in an `im::Vector`, so cloning a deck for a snapshot or an
//! undo point is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::sort::{sections, sort_cards, DeckSection};
use crate::cards::{Card, CardId};
use crate::core::DuplicateCardError;

/// Which card, if any, is the commander.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommanderSlot {
    #[default]
    NoCommander,
    Commander(CardId),
}

impl CommanderSlot {
    /// Commander ID, if set.
    #[must_use]
    pub fn id(&self) -> Option<&CardId> {
        match self {
            CommanderSlot::NoCommander => None,
            CommanderSlot::Commander(id) => Some(id),
        }
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        matches!(self, CommanderSlot::Commander(_))
    }
}

/// Result of a successful `Deck::add`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Added {
    /// Added as an ordinary deck member.
    Member,
    /// Added and designated commander.
    Commander,
}

/// The deck being built.
///
/// ## Example
///
/// ```
/// use commander_deck::cards::Card;
/// use commander_deck::deck::{Added, Deck};
///
/// let mut deck = Deck::new();
/// let ezuri = Card::new("ezuri", "Ezuri", "Legendary Creature — Elf Warrior");
///
/// assert_eq!(deck.add(ezuri.clone()).unwrap(), Added::Commander);
/// assert!(deck.add(ezuri).is_err());
/// assert_eq!(deck.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    entries: Vector<Card>,
    commander: CommanderSlot,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in display order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.entries
    }

    /// Iterate cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn commander_slot(&self) -> &CommanderSlot {
        &self.commander
    }

    /// The commander's entry.
    #[must_use]
    pub fn commander(&self) -> Option<&Card> {
        let id = self.commander.id()?;
        self.entries.iter().find(|card| &card.id == id)
    }

    /// Whether `card` is the commander entry (by ID).
    #[must_use]
    pub fn is_commander(&self, card: &Card) -> bool {
        self.commander.id() == Some(&card.id)
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.entries.iter().any(|card| &card.id == id)
    }

    /// Number of entries with this ID.
    #[must_use]
    pub fn copies_of(&self, id: &CardId) -> usize {
        self.entries.iter().filter(|card| &card.id == id).count()
    }

    /// Add a card.
    ///
    /// A legendary creature added while no commander is set becomes the
    /// commander. A rejected add changes nothing, commander included.
    ///
    /// # Errors
    ///
    /// `DuplicateCardError` if a non-basic-land card with the same ID is
    /// already in the deck.
    pub fn add(&mut self, card: Card) -> Result<Added, DuplicateCardError> {
        let becomes_commander = !self.commander.is_set() && card.is_commander_eligible();

        if !card.is_basic_land() && self.contains(&card.id) {
            return Err(DuplicateCardError {
                id: card.id,
                name: card.name,
            });
        }

        let added = if becomes_commander {
            self.commander = CommanderSlot::Commander(card.id.clone());
            Added::Commander
        } else {
            Added::Member
        };
        self.entries.push_back(card);
        self.resort();
        Ok(added)
    }

    /// Add a card restored from a snapshot, trusting its commander flag.
    ///
    /// Legendary creatures are not auto-designated here; only a flagged
    /// entry becomes commander, and only if none is set yet.
    ///
    /// # Errors
    ///
    /// `DuplicateCardError` as for `add`.
    pub fn restore_entry(&mut self, card: Card, is_commander: bool) -> Result<Added, DuplicateCardError> {
        if !card.is_basic_land() && self.contains(&card.id) {
            return Err(DuplicateCardError {
                id: card.id,
                name: card.name,
            });
        }

        let added = if is_commander && !self.commander.is_set() {
            self.commander = CommanderSlot::Commander(card.id.clone());
            Added::Commander
        } else {
            Added::Member
        };
        self.entries.push_back(card);
        Ok(added)
    }

    /// Remove the first entry with `id`.
    ///
    /// Returns the removed card and whether it was the commander, or `None`
    /// if no entry matched.
    pub fn remove(&mut self, id: &CardId) -> Option<(Card, bool)> {
        let index = self.entries.iter().position(|card| &card.id == id)?;
        let card = self.entries.remove(index);

        let was_commander = self.commander.id() == Some(id);
        if was_commander {
            self.commander = CommanderSlot::NoCommander;
        }
        self.resort();
        Some((card, was_commander))
    }

    /// Re-establish display order.
    pub fn resort(&mut self) {
        self.entries = sort_cards(&self.entries, &self.commander);
    }

    /// Display order split into headed sections.
    #[must_use]
    pub fn sections(&self) -> Vec<DeckSection> {
        sections(&self.entries, &self.commander)
    }

    /// Entries paired with their commander flag, for snapshots.
    pub fn flagged_entries(&self) -> impl Iterator<Item = (&Card, bool)> {
        let mut commander = self.commander.id();
        self.entries.iter().map(move |card| {
            // Only the first entry with the commander's ID carries the flag.
            let flagged = commander == Some(&card.id);
            if flagged {
                commander = None;
            }
            (card, flagged)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> Card {
        Card::new("forest", "Forest", "Basic Land — Forest")
    }

    fn legend(id: &str) -> Card {
        Card::new(id, id, "Legendary Creature — Elf")
    }

    #[test]
    fn test_singleton_rule() {
        let mut deck = Deck::new();
        let ring = Card::new("sol", "Sol Ring", "Artifact");

        assert_eq!(deck.add(ring.clone()).unwrap(), Added::Member);
        let err = deck.add(ring).unwrap_err();

        assert_eq!(err.id, CardId::new("sol"));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_basic_lands_unlimited() {
        let mut deck = Deck::new();
        for _ in 0..5 {
            deck.add(forest()).unwrap();
        }
        assert_eq!(deck.copies_of(&CardId::new("forest")), 5);
    }

    #[test]
    fn test_first_legend_becomes_commander() {
        let mut deck = Deck::new();
        deck.add(forest()).unwrap();
        assert_eq!(deck.add(legend("x")).unwrap(), Added::Commander);
        assert_eq!(deck.add(legend("y")).unwrap(), Added::Member);

        assert_eq!(deck.commander().unwrap().id, CardId::new("x"));
        assert!(deck.contains(&CardId::new("y")));
    }

    #[test]
    fn test_rejected_legend_does_not_become_commander() {
        let mut deck = Deck::new();
        deck.add(legend("x")).unwrap();
        deck.add(legend("y")).unwrap();
        deck.remove(&CardId::new("x"));
        assert!(!deck.commander_slot().is_set());

        // "y" is already a member; adding it again is a duplicate
        assert!(deck.add(legend("y")).is_err());
        assert!(!deck.commander_slot().is_set());
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_remove_commander_clears_slot() {
        let mut deck = Deck::new();
        deck.add(legend("x")).unwrap();
        let (card, was_commander) = deck.remove(&CardId::new("x")).unwrap();
        assert_eq!(card.id, CardId::new("x"));
        assert!(was_commander);
        assert_eq!(deck.commander_slot(), &CommanderSlot::NoCommander);
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut deck = Deck::new();
        deck.add(forest()).unwrap();
        assert!(deck.remove(&CardId::new("nope")).is_none());
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_remove_one_basic_land_copy() {
        let mut deck = Deck::new();
        deck.add(forest()).unwrap();
        deck.add(forest()).unwrap();
        deck.remove(&CardId::new("forest"));
        assert_eq!(deck.copies_of(&CardId::new("forest")), 1);
    }

    #[test]
    fn test_flagged_entries() {
        let mut deck = Deck::new();
        deck.add(forest()).unwrap();
        deck.add(legend("x")).unwrap();

        let flags: Vec<_> = deck
            .flagged_entries()
            .map(|(card, flag)| (card.id.as_str().to_string(), flag))
            .collect();
        assert_eq!(flags, vec![("x".to_string(), true), ("forest".to_string(), false)]);
    }

    #[test]
    fn test_restore_entry_uses_flag_only() {
        let mut deck = Deck::new();
        deck.restore_entry(legend("x"), false).unwrap();
        deck.restore_entry(legend("y"), true).unwrap();
        deck.restore_entry(legend("z"), true).unwrap();
        assert_eq!(deck.commander_slot(), &CommanderSlot::Commander(CardId::new("y")));
    }
}
