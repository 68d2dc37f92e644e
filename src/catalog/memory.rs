//! In-process card catalog.
//!
//! Holds a fixed set of cards and answers lookups from memory. Name
//! matching is exact up to ASCII case, like the catalog's own exact-name
//! endpoint.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rustc_hash::FxHashMap;

use super::CardLookup;
use crate::cards::{Card, CardId};
use crate::core::LookupError;

/// Catalog backed by an in-memory card set.
///
/// ## Example
///
/// ```
/// use commander_deck::cards::Card;
/// use commander_deck::catalog::InMemoryCatalog;
///
/// let mut catalog = InMemoryCatalog::new();
/// catalog.register(Card::new("sol", "Sol Ring", "Artifact"));
///
/// assert!(catalog.get_named("sol ring").is_some());
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    cards: FxHashMap<CardId, Card>,
    names: FxHashMap<String, CardId>,
    lookups: AtomicUsize,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a card list.
    #[must_use]
    pub fn with_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut catalog = Self::new();
        for card in cards {
            catalog.register(card);
        }
        catalog
    }

    /// Register a card, replacing any card with the same ID.
    pub fn register(&mut self, card: Card) {
        if let Some(previous) = self.cards.get(&card.id) {
            self.names.remove(&name_key(&previous.name));
        }
        self.names.insert(name_key(&card.name), card.id.clone());
        self.cards.insert(card.id.clone(), card);
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Get a card by exact name (ASCII case-insensitive).
    #[must_use]
    pub fn get_named(&self, name: &str) -> Option<&Card> {
        self.names
            .get(&name_key(name))
            .and_then(|id| self.cards.get(id))
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of lookups answered so far, hits and misses alike.
    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

#[async_trait]
impl CardLookup for InMemoryCatalog {
    async fn lookup_named(&self, name: &str) -> Result<Card, LookupError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.get_named(name)
            .cloned()
            .ok_or_else(|| LookupError::NotFound {
                name: name.to_string(),
            })
    }

    async fn lookup_id(&self, id: &CardId) -> Result<Card, LookupError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.get(id).cloned().ok_or_else(|| LookupError::NotFound {
            name: id.to_string(),
        })
    }
}
