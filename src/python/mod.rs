//! Python bindings for the commander-deck engine.
//!
//! # Quick Start
//!
//! ```python
//! import json
//! import commander_deck as cd
//!
//! engine = cd.DeckEngine(storage_dir="./decks")
//!
//! ezuri = cd.Card(json.dumps(catalog_json))
//! engine.add_card(ezuri)          # True: the commander filter changed
//!
//! def lookup(name):
//!     card = my_catalog.get(name)
//!     return json.dumps(card) if card else None
//!
//! added, failures = engine.import_text(open("deck.txt").read(), lookup)
//! print(engine.export_text())
//! ```

use pyo3::prelude::*;

use crate::logging::{self, Profile};

mod py_cards;
mod py_deck;

pub use py_cards::*;
pub use py_deck::*;

/// commander_deck: singleton deck builder with commander color filtering.
#[pymodule]
fn commander_deck(m: &Bound<'_, PyModule>) -> PyResult<()> {
    logging::init(Profile::Production);
    m.add_class::<PyCard>()?;
    m.add_class::<PyDeckEngine>()?;
    Ok(())
}
