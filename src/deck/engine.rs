//! Deck composition engine.
//!
//! `DeckEngine` is the single owner of deck state. Front ends call
//! `add_card`/`remove_card`/`import_text`; the engine applies the deck
//! rules, keeps the commander filter in step, writes a full snapshot after
//! every successful mutation, and reports whether the filter changed so the
//! caller knows to re-run its catalog search.
//!
//! ## Lifecycle
//!
//! 1. `DeckEngine::new` reads the snapshot (missing or corrupt ⇒ empty deck)
//! 2. Mutations go through the engine's methods only
//! 3. Each successful mutation overwrites the snapshot
//!
//! Everything runs on the caller's thread; the only await point is the
//! per-line catalog lookup during import.

use im::Vector;
use tracing::{debug, error, info, warn};

use super::filter::{CommanderFilter, FilterView};
use super::sort::DeckSection;
use super::state::{Added, Deck};
use super::text::export_decklist;
use crate::cards::{Card, CardId, Price};
use crate::core::{DeckConfig, DuplicateCardError, StorageError};
use crate::storage::{decode_snapshot, encode_snapshot, MemoryStore, SnapshotStore};

/// Outcome of a successful mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeckUpdate {
    /// The commander filter's `{active, colors}` changed; re-query the catalog.
    pub filter_changed: bool,
}

/// The deck composition engine.
///
/// ## Example
///
/// ```
/// use commander_deck::cards::{Card, Color};
/// use commander_deck::core::DeckConfig;
/// use commander_deck::deck::DeckEngine;
/// use commander_deck::storage::MemoryStore;
///
/// let mut engine = DeckEngine::new(DeckConfig::default(), MemoryStore::new());
///
/// let ezuri = Card::new("ezuri", "Ezuri, Renegade Leader", "Legendary Creature — Elf Warrior")
///     .with_colors([Color::Green]);
/// let update = engine.add_card(ezuri).unwrap();
///
/// assert!(update.filter_changed);
/// assert!(engine.filter().is_active());
/// assert_eq!(engine.export_text(), "1 Ezuri, Renegade Leader\n");
/// ```
#[derive(Debug)]
pub struct DeckEngine<S: SnapshotStore = MemoryStore> {
    config: DeckConfig,
    store: S,
    deck: Deck,
    filter: CommanderFilter,
}

impl<S: SnapshotStore> DeckEngine<S> {
    /// Create an engine and restore the deck from `store`.
    pub fn new(config: DeckConfig, store: S) -> Self {
        let mut engine = Self {
            config,
            store,
            deck: Deck::new(),
            filter: CommanderFilter::new(),
        };
        engine.restore();
        engine
    }

    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the engine, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    // === Mutation ===

    /// Add a card to the deck.
    ///
    /// The first legendary creature added while no commander is set becomes
    /// the commander and switches the color filter on.
    ///
    /// # Errors
    ///
    /// `DuplicateCardError` if a non-basic-land card with this ID is already
    /// in the deck; nothing is changed in that case.
    pub fn add_card(&mut self, card: Card) -> Result<DeckUpdate, DuplicateCardError> {
        let before = self.filter.view();
        let colors = card.color_identity.clone();
        let name = card.name.clone();

        match self.deck.add(card)? {
            Added::Commander => {
                info!(card = %name, colors = %colors, "commander designated");
                self.filter.add_commander(colors);
            }
            Added::Member => debug!(card = %name, size = self.deck.len(), "card added"),
        }

        self.persist_after_mutation();
        Ok(self.update_since(&before))
    }

    /// Remove one copy of a card. Unknown IDs are a no-op.
    pub fn remove_card(&mut self, id: &CardId) -> DeckUpdate {
        let before = self.filter.view();

        let Some((card, was_commander)) = self.deck.remove(id) else {
            debug!(%id, "remove ignored, card not in deck");
            return DeckUpdate::default();
        };

        if was_commander {
            info!(card = %card.name, "commander removed");
            self.filter.remove_commander();
        } else {
            debug!(card = %card.name, size = self.deck.len(), "card removed");
        }

        self.persist_after_mutation();
        self.update_since(&before)
    }

    /// Switch the commander filter on or off. No-op without a commander.
    pub fn toggle_filter(&mut self) -> DeckUpdate {
        let changed = self.filter.toggle();
        if changed {
            debug!(active = self.filter.is_active(), "commander filter toggled");
        }
        DeckUpdate {
            filter_changed: changed,
        }
    }

    fn update_since(&self, before: &FilterView) -> DeckUpdate {
        DeckUpdate {
            filter_changed: self.filter.view() != *before,
        }
    }

    // === Derived views ===

    /// Cards in display order: commander, then grouped by primary type.
    #[must_use]
    pub fn sort_order(&self) -> &Vector<Card> {
        self.deck.cards()
    }

    /// Display order split into headed sections.
    #[must_use]
    pub fn sections(&self) -> Vec<DeckSection> {
        self.deck.sections()
    }

    #[must_use]
    pub fn commander(&self) -> Option<&Card> {
        self.deck.commander()
    }

    #[must_use]
    pub fn filter(&self) -> &CommanderFilter {
        &self.filter
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    #[must_use]
    pub fn copies_of(&self, id: &CardId) -> usize {
        self.deck.copies_of(id)
    }

    /// Total price of every card in the deck.
    ///
    /// Each card contributes its primary-currency price, else its fallback
    /// price, else nothing. This is a sum, not a per-card mean.
    #[must_use]
    pub fn aggregate_price(&self) -> Price {
        let (primary, fallback) = (self.config.primary_currency, self.config.fallback_currency);
        self.deck
            .iter()
            .filter_map(|card| card.prices.preferred(primary, fallback))
            .map(|(price, _)| price)
            .sum()
    }

    /// Per-card price label, e.g. `1.50€`; empty when unpriced.
    #[must_use]
    pub fn price_label(&self, card: &Card) -> String {
        card.prices
            .preferred(self.config.primary_currency, self.config.fallback_currency)
            .map(|(price, currency)| format!("{}{}", price, currency.symbol()))
            .unwrap_or_default()
    }

    /// Deck total labelled with the primary currency, e.g. `3.75€`.
    #[must_use]
    pub fn total_price_label(&self) -> String {
        format!("{}{}", self.aggregate_price(), self.config.primary_currency.symbol())
    }

    // === Serialization ===

    /// Decklist text, one `<count> <name>` line per distinct name.
    #[must_use]
    pub fn export_text(&self) -> String {
        export_decklist(self.deck.iter().map(|card| card.name.as_str()))
    }

    /// Write the full deck snapshot to the store.
    ///
    /// # Errors
    ///
    /// Fails if the snapshot cannot be encoded or written.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        let json = encode_snapshot(self.deck.flagged_entries())?;
        self.store.save(&self.config.storage_key, &json)
    }

    fn persist_after_mutation(&mut self) {
        if let Err(e) = self.persist() {
            error!(error = %e, key = %self.config.storage_key, "failed to persist deck snapshot");
        }
    }

    /// Replace in-memory state with the stored snapshot.
    ///
    /// A missing, unreadable or corrupt snapshot yields an empty deck. The
    /// first entry flagged as commander is the commander and turns the
    /// filter on; later flags and non-basic duplicates are dropped.
    pub fn restore(&mut self) {
        self.deck = Deck::new();
        self.filter = CommanderFilter::new();

        let key = self.config.storage_key.clone();
        let json = match self.store.load(&key) {
            Ok(Some(json)) => json,
            Ok(None) => {
                debug!(%key, "no deck snapshot, starting empty");
                return;
            }
            Err(e) => {
                warn!(error = %e, "could not read deck snapshot, starting empty");
                return;
            }
        };

        let entries = match decode_snapshot(&key, &json) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "discarding corrupt deck snapshot");
                return;
            }
        };

        for entry in entries {
            let flagged = entry.is_commander;
            let colors = entry.card.color_identity.clone();
            match self.deck.restore_entry(entry.card, flagged) {
                Ok(Added::Commander) => self.filter.add_commander(colors),
                Ok(Added::Member) if flagged => {
                    warn!("snapshot flags more than one commander, keeping the first");
                }
                Ok(Added::Member) => {}
                Err(e) => warn!(error = %e, "dropping duplicate snapshot entry"),
            }
        }
        self.deck.resort();

        info!(
            size = self.deck.len(),
            commander = self.deck.commander().map(|c| c.name.as_str()).unwrap_or("none"),
            "deck restored"
        );
    }
}
