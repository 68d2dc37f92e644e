//! Snapshot format.
//!
//! A snapshot is a JSON array of card records in deck order. The commander's
//! record carries `"isCommander": true`; other records omit the field.
//!
//! ```json
//! [
//!   {"id": "e1", "name": "Ezuri", "type_line": "Legendary Creature — Elf", "isCommander": true, ...},
//!   {"id": "f1", "name": "Forest", "type_line": "Basic Land — Forest", ...}
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::StorageError;

/// One record of a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    #[serde(flatten)]
    pub card: Card,

    #[serde(rename = "isCommander", default, skip_serializing_if = "is_false")]
    pub is_commander: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

#[derive(Serialize)]
struct FlaggedRef<'a> {
    #[serde(flatten)]
    card: &'a Card,
    #[serde(rename = "isCommander", skip_serializing_if = "is_false")]
    is_commander: bool,
}

/// Serialize deck entries, in order, to snapshot JSON.
///
/// # Errors
///
/// Fails only if a card cannot be represented as JSON.
pub fn encode_snapshot<'a>(
    entries: impl IntoIterator<Item = (&'a Card, bool)>,
) -> Result<String, StorageError> {
    let records: Vec<FlaggedRef<'a>> = entries
        .into_iter()
        .map(|(card, is_commander)| FlaggedRef { card, is_commander })
        .collect();
    serde_json::to_string(&records).map_err(StorageError::Encode)
}

/// Parse snapshot JSON stored under `key`.
///
/// # Errors
///
/// Returns `StorageError::Corrupt` when the text is not a snapshot.
pub fn decode_snapshot(key: &str, json: &str) -> Result<Vec<SnapshotEntry>, StorageError> {
    serde_json::from_str(json).map_err(|source| StorageError::Corrupt {
        key: key.to_string(),
        source,
    })
}
