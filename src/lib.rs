//! # commander-deck
//!
//! A deck composition engine for singleton "commander" card decks.
//!
//! ## Design Principles
//!
//! 1. **Single Owner**: All deck state lives in one `DeckEngine`. Front ends
//!    call its methods; nothing else mutates the deck.
//!
//! 2. **Rules at the Boundary**: `add_card` enforces the one-copy rule
//!    (basic lands exempt) and designates the commander. A rejected add
//!    changes nothing.
//!
//! 3. **Snapshots, not Deltas**: Every successful mutation writes the whole
//!    deck to a `SnapshotStore`. Startup restores from it, and a corrupt
//!    snapshot means an empty deck, never an error.
//!
//! ## Architecture
//!
//! - **Commander Filter**: Derived from the commander, never stored. The
//!   engine reports when it changes so the caller can re-run its search.
//!
//! - **Sequential Import**: Decklist lines are resolved one at a time through
//!   an async `CardLookup`; a bad line is recorded and skipped.
//!
//! ## Modules
//!
//! - `cards`: Card records, colors, prices
//! - `catalog`: Card lookup trait and in-memory catalog
//! - `core`: Configuration and errors
//! - `deck`: Deck state, commander filter, ordering, engine, import/export
//! - `storage`: Snapshot stores and snapshot format
//! - `logging`: Subscriber setup

pub mod cards;
pub mod catalog;
pub mod core;
pub mod deck;
pub mod logging;
pub mod storage;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::cards::{Card, CardId, Color, ColorIdentity, Currency, Price, Prices};

pub use crate::catalog::{CardLookup, InMemoryCatalog};

pub use crate::core::{
    DeckConfig, DuplicateCardError, ImportFailure, ImportPolicy, LookupError, StorageError,
};

pub use crate::deck::{
    CommanderFilter, CommanderSlot, Deck, DeckEngine, DeckSection, DeckUpdate, FilterView,
    ImportReport, LineOutcome,
};

pub use crate::storage::{FileStore, MemoryStore, SnapshotStore};
