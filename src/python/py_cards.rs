//! Card bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{Card, Currency};

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Build a card from catalog JSON.
    #[new]
    fn new(json: &str) -> PyResult<Self> {
        serde_json::from_str(json)
            .map(Self)
            .map_err(|e| PyValueError::new_err(format!("invalid card JSON: {e}")))
    }

    #[getter]
    fn id(&self) -> String {
        self.0.id.as_str().to_string()
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    #[getter]
    fn type_line(&self) -> String {
        self.0.type_line.clone()
    }

    /// Color identity as WUBRG letters, `"C"` when colorless.
    #[getter]
    fn colors(&self) -> String {
        self.0.color_identity.to_string()
    }

    #[getter]
    fn primary_type(&self) -> String {
        self.0.primary_type().to_string()
    }

    /// Price in `"usd"`, `"usd_foil"`, `"eur"`, `"eur_foil"` or `"tix"`.
    fn price(&self, currency: &str) -> PyResult<Option<String>> {
        let currency: Currency = serde_json::from_value(serde_json::Value::String(currency.to_string()))
            .map_err(|_| PyValueError::new_err(format!("unknown currency: {currency}")))?;
        Ok(self.0.prices.get(currency).map(|p| p.to_string()))
    }

    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.0).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!("Card(id={:?}, name={:?})", self.0.id.as_str(), self.0.name)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
