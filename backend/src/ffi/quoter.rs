//! PyO3 wrapper for the fee quoter
//!
//! This module provides the Python interface to the Rust fee engine.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::models::complexity::Complexity;
use crate::models::quote::QuoteRequest;
use crate::schedule::FeeSchedule;

/// Python wrapper for the fee schedule
///
/// # Example (from Python)
///
/// ```python
/// from fee_quoter_core_rs import FeeQuoter
///
/// quoter = FeeQuoter()
/// fee = quoter.primary_fee(100_000.0, "low")
/// half = quoter.discounted_fee(100_000.0, "low")
/// record = quoter.quote_json(100_000.0, "low")
/// ```
#[pyclass(name = "FeeQuoter")]
pub struct PyFeeQuoter {
    inner: FeeSchedule,
}

fn parse_complexity(label: &str) -> PyResult<Complexity> {
    label
        .parse::<Complexity>()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymethods]
impl PyFeeQuoter {
    /// Create a quoter over the built-in schedule
    #[new]
    fn new() -> Self {
        PyFeeQuoter {
            inner: FeeSchedule::builtin(),
        }
    }

    /// Create a quoter from a JSON schedule document
    ///
    /// # Errors
    /// Raises ValueError if the document is malformed or the schedule
    /// violates the tier invariants.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let inner = FeeSchedule::from_json(json)
            .map_err(|e| PyValueError::new_err(format!("failed to load schedule: {}", e)))?;
        Ok(PyFeeQuoter { inner })
    }

    /// Primary fee for a budget and category label
    ///
    /// # Errors
    /// Raises ValueError for an unknown category, a budget below the
    /// minimum, or a budget above the last tier threshold.
    fn primary_fee(&self, budget: f64, complexity: &str) -> PyResult<f64> {
        let complexity = parse_complexity(complexity)?;
        self.inner
            .primary_fee(budget, complexity)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Discounted fee for a budget and category label
    fn discounted_fee(&self, budget: f64, complexity: &str) -> PyResult<f64> {
        let complexity = parse_complexity(complexity)?;
        self.inner
            .discounted_fee(budget, complexity)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Full quote record as a JSON string
    fn quote_json(&self, budget: f64, complexity: &str) -> PyResult<String> {
        let complexity = parse_complexity(complexity)?;
        let quote = self
            .inner
            .quote(QuoteRequest::new(budget, complexity))
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        serde_json::to_string(&quote)
            .map_err(|e| PyValueError::new_err(format!("failed to serialize quote: {}", e)))
    }
}
