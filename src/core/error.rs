//! Error types.
//!
//! Nothing here is fatal. `DuplicateCardError` goes back to the user,
//! everything else is recovered where it happens:
//! - `LookupError`/`ImportFailure`: the import line is skipped
//! - `StorageError::Corrupt`: restore starts from an empty deck
//! - `StorageError::Io`/`Encode`/`InvalidKey`: logged after a mutation, state kept

use thiserror::Error;

use crate::cards::CardId;

/// A second copy of a non-basic-land card was added.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("only one copy of each card is allowed (except basic lands): {name} is already in the deck")]
pub struct DuplicateCardError {
    pub id: CardId,
    pub name: String,
}

/// Failure reported by a card catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("card not found: {name}")]
    NotFound { name: String },

    #[error("catalog unavailable: {message}")]
    Unavailable { message: String },

    #[error("catalog returned an unreadable card: {message}")]
    Malformed { message: String },
}

/// Why one line of a decklist could not be imported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportFailure {
    #[error("invalid copy count {token:?}")]
    InvalidCount { token: String },

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Snapshot storage failure.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o failed for key {key:?}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot under key {key:?} is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage key {key:?} must be non-empty and use only [A-Za-z0-9_-]")]
    InvalidKey { key: String },

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}
