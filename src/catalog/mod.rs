//! Card catalog lookup.
//!
//! The engine never talks to a catalog service directly. Import resolves
//! decklist names through a `CardLookup`, which front ends implement over
//! whatever catalog they use (an HTTP client, a local bulk-data file, a
//! Python callable). `InMemoryCatalog` is the in-process implementation.
//!
//! Lookups are async; the import pipeline awaits one at a time.

pub mod memory;

use async_trait::async_trait;

use crate::cards::{Card, CardId};
use crate::core::LookupError;

pub use memory::InMemoryCatalog;

/// Resolves cards by exact name or identifier.
///
/// Any `Err` is treated by import as a failure of that one line.
#[async_trait]
pub trait CardLookup: Send + Sync {
    /// Find a card by its exact printed name.
    async fn lookup_named(&self, name: &str) -> Result<Card, LookupError>;

    /// Find a card by catalog identifier.
    ///
    /// Catalogs without ID lookup keep the default, which finds nothing.
    async fn lookup_id(&self, id: &CardId) -> Result<Card, LookupError> {
        Err(LookupError::NotFound {
            name: id.to_string(),
        })
    }
}
