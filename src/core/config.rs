//! Engine configuration.
//!
//! Front ends configure the engine at startup by providing a `DeckConfig`:
//! - where the snapshot lives (`storage_key`)
//! - which currency quote the price total prefers
//! - what an import does after a line fails
//!
//! ## Example
//!
//! ```
//! use commander_deck::core::{DeckConfig, ImportPolicy};
//! use commander_deck::cards::Currency;
//!
//! let config = DeckConfig::new()
//!     .with_storage_key("my-deck")
//!     .with_currencies(Currency::Usd, Currency::Eur)
//!     .with_import_policy(ImportPolicy::StopOnFailure);
//!
//! assert_eq!(config.storage_key, "my-deck");
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::Currency;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "deck";

/// What an import does when a line cannot be resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportPolicy {
    /// Record the failure and go on with the next line.
    #[default]
    ContinueOnFailure,
    /// Record the failure and stop; lines already imported stay in the deck.
    StopOnFailure,
}

/// Deck engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Key the snapshot is stored under.
    pub storage_key: String,

    /// Currency tried first when totaling prices.
    pub primary_currency: Currency,

    /// Currency used when a card has no primary quote.
    pub fallback_currency: Currency,

    /// Failure handling for decklist imports.
    pub import_policy: ImportPolicy,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            primary_currency: Currency::Eur,
            fallback_currency: Currency::Usd,
            import_policy: ImportPolicy::ContinueOnFailure,
        }
    }
}

impl DeckConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the snapshot storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set primary and fallback currencies.
    #[must_use]
    pub fn with_currencies(mut self, primary: Currency, fallback: Currency) -> Self {
        self.primary_currency = primary;
        self.fallback_currency = fallback;
        self
    }

    /// Set the import failure policy.
    #[must_use]
    pub fn with_import_policy(mut self, policy: ImportPolicy) -> Self {
        self.import_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DeckConfig::default();
        assert_eq!(config.storage_key, "deck");
        assert_eq!(config.primary_currency, Currency::Eur);
        assert_eq!(config.fallback_currency, Currency::Usd);
        assert_eq!(config.import_policy, ImportPolicy::ContinueOnFailure);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: DeckConfig =
            serde_json::from_str(r#"{"storage_key": "edh", "import_policy": "stop_on_failure"}"#).unwrap();
        assert_eq!(config.storage_key, "edh");
        assert_eq!(config.import_policy, ImportPolicy::StopOnFailure);
        assert_eq!(config.primary_currency, Currency::Eur);
    }
}
