//! Core engine types: configuration and errors.
//!
//! Shared by every other module. Front ends configure the engine via
//! `DeckConfig` rather than by reaching into deck state.

pub mod config;
pub mod error;

pub use config::{DeckConfig, ImportPolicy, DEFAULT_STORAGE_KEY};
pub use error::{DuplicateCardError, ImportFailure, LookupError, StorageError};
