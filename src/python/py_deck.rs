//! Deck engine bindings for Python.

use async_trait::async_trait;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tokio_util::sync::CancellationToken;

use super::py_cards::PyCard;
use crate::cards::{Card, CardId};
use crate::catalog::CardLookup;
use crate::core::{DeckConfig, LookupError};
use crate::deck::{DeckEngine, LineOutcome};
use crate::storage::{FileStore, MemoryStore, SnapshotStore};

type BoxedStore = Box<dyn SnapshotStore + Send>;

/// Python-implemented catalog.
///
/// The callable receives a card name (or ID) and returns card JSON, or
/// `None` when the card does not exist.
struct PyLookup {
    callback: PyObject,
}

impl PyLookup {
    fn call(&self, query: &str) -> Result<Card, LookupError> {
        Python::with_gil(|py| {
            let result = self
                .callback
                .call1(py, (query,))
                .map_err(|e| LookupError::Unavailable {
                    message: e.to_string(),
                })?;
            if result.is_none(py) {
                return Err(LookupError::NotFound {
                    name: query.to_string(),
                });
            }
            let json: String = result.extract(py).map_err(|e| LookupError::Malformed {
                message: e.to_string(),
            })?;
            serde_json::from_str(&json).map_err(|e| LookupError::Malformed {
                message: e.to_string(),
            })
        })
    }
}

#[async_trait]
impl CardLookup for PyLookup {
    async fn lookup_named(&self, name: &str) -> Result<Card, LookupError> {
        self.call(name)
    }

    async fn lookup_id(&self, id: &CardId) -> Result<Card, LookupError> {
        self.call(id.as_str())
    }
}

/// Python wrapper for DeckEngine.
#[pyclass(name = "DeckEngine")]
pub struct PyDeckEngine {
    engine: DeckEngine<BoxedStore>,
}

#[pymethods]
impl PyDeckEngine {
    /// Create an engine. Without `storage_dir` the deck lives in memory only.
    #[new]
    #[pyo3(signature = (storage_dir = None, storage_key = "deck"))]
    fn new(storage_dir: Option<String>, storage_key: &str) -> Self {
        let store: BoxedStore = match storage_dir {
            Some(dir) => Box::new(FileStore::new(dir)),
            None => Box::new(MemoryStore::new()),
        };
        let config = DeckConfig::new().with_storage_key(storage_key);
        Self {
            engine: DeckEngine::new(config, store),
        }
    }

    /// Add a card. Returns whether the commander filter changed.
    fn add_card(&mut self, card: &PyCard) -> PyResult<bool> {
        self.engine
            .add_card(card.0.clone())
            .map(|update| update.filter_changed)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Remove one copy of a card. Returns whether the commander filter changed.
    fn remove_card(&mut self, id: &str) -> bool {
        self.engine.remove_card(&CardId::new(id)).filter_changed
    }

    /// Cards in display order.
    fn sort_order(&self) -> Vec<PyCard> {
        self.engine.sort_order().iter().cloned().map(PyCard).collect()
    }

    /// Display sections as `(heading, cards)` pairs.
    fn sections(&self) -> Vec<(String, Vec<PyCard>)> {
        self.engine
            .sections()
            .into_iter()
            .map(|s| (s.heading, s.cards.into_iter().map(PyCard).collect()))
            .collect()
    }

    /// Deck total with two decimals.
    fn aggregate_price(&self) -> String {
        self.engine.aggregate_price().to_string()
    }

    fn export_text(&self) -> String {
        self.engine.export_text()
    }

    /// Import a decklist.
    ///
    /// Returns `(copies_added, failures)` where each failure is
    /// `(line, name, reason)`.
    fn import_text(&mut self, text: &str, lookup: PyObject) -> (u32, Vec<(usize, String, String)>) {
        let lookup = PyLookup { callback: lookup };
        let cancel = CancellationToken::new();
        let report = futures::executor::block_on(self.engine.import_text(text, &lookup, &cancel));

        let failures = report
            .outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                LineOutcome::Failed { line, name, reason } => {
                    Some((*line, name.clone(), reason.to_string()))
                }
                LineOutcome::Added { .. } => None,
            })
            .collect();
        (report.added_copies(), failures)
    }

    /// Switch the commander filter. Returns whether it changed.
    fn toggle_filter(&mut self) -> bool {
        self.engine.toggle_filter().filter_changed
    }

    #[getter]
    fn filter_active(&self) -> bool {
        self.engine.filter().is_active()
    }

    /// Commander colors as WUBRG letters; empty without a commander.
    #[getter]
    fn filter_colors(&self) -> String {
        self.engine
            .filter()
            .colors()
            .map(|c| c.to_string())
            .unwrap_or_default()
    }

    /// Catalog search fragment for the active filter.
    fn query_clause(&self) -> Option<String> {
        self.engine.filter().query_clause()
    }

    #[getter]
    fn commander(&self) -> Option<PyCard> {
        self.engine.commander().cloned().map(PyCard)
    }

    fn __len__(&self) -> usize {
        self.engine.len()
    }
}
