//! Quote request and quote result models
//!
//! A `QuoteRequest` is transient input constructed per calculation. A `Quote`
//! is the computed result, carrying both the primary (schedule) fee and the
//! discounted fee, plus a generated UUID so callers can reference individual
//! quotations across the FFI/CLI boundary.

use serde::{Deserialize, Serialize};

use super::complexity::Complexity;

/// Input to a fee quotation: a project budget and a complexity category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Total project cost used as the basis for the fee (currency units, >= 1)
    pub budget: f64,

    /// Project complexity category selecting the fee table
    pub complexity: Complexity,
}

impl QuoteRequest {
    /// Create a new quote request
    ///
    /// Budget validation happens at computation time, not construction time,
    /// so an invalid request is representable but never yields a fee.
    pub fn new(budget: f64, complexity: Complexity) -> Self {
        Self { budget, complexity }
    }
}

/// A computed fee quotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Unique quote identifier (UUID)
    pub id: String,

    /// Budget the quote was computed for
    pub budget: f64,

    /// Complexity category the quote was computed for
    pub complexity: Complexity,

    /// Fee computed directly from the tier table
    pub primary_fee: f64,

    /// Primary fee scaled by the fixed discount factor
    pub discounted_fee: f64,
}

impl Quote {
    /// Assemble a quote for a request from already-computed fees
    pub(crate) fn assemble(request: QuoteRequest, primary_fee: f64, discounted_fee: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            budget: request.budget,
            complexity: request.complexity,
            primary_fee,
            discounted_fee,
        }
    }
}
