//! Deck composition: state, rules, derived views, import/export.
//!
//! ## Key Types
//!
//! - `Deck`: Card list plus `CommanderSlot`; enforces the one-copy rule
//! - `CommanderFilter`: Color filter derived from the commander
//! - `DeckEngine`: Owns deck and filter, persists snapshots, imports text
//! - `ImportReport`: Per-line outcome of a decklist import
//!
//! ## Rules
//!
//! - Non-basic-land cards: at most one copy per card ID
//! - Basic lands: any number of copies
//! - The first legendary creature added while no commander is set becomes
//!   the commander; removing it clears the designation

pub mod engine;
pub mod filter;
pub mod import;
pub mod sort;
pub mod state;
pub mod text;

pub use engine::{DeckEngine, DeckUpdate};
pub use filter::{CommanderFilter, FilterState, FilterView};
pub use import::{ImportReport, LineOutcome};
pub use sort::{type_rank, DeckSection, TYPE_PRECEDENCE};
pub use state::{Added, CommanderSlot, Deck};
pub use text::{export_decklist, parse_decklist, DecklistLine};
