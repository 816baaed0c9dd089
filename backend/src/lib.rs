//! Fee Quoter Core - Rust Engine
//!
//! Tiered professional-fee quotation engine with deterministic computation.
//!
//! # Architecture
//!
//! - **models**: Domain types (Complexity, FeeTier, QuoteRequest, Quote)
//! - **schedule**: Tiered fee schedule, tier lookup, and fee computation
//! - **format**: Currency formatting at the presentation boundary
//!
//! # Critical Invariants
//!
//! 1. All money values are f64 (double precision, matching the fee policy source)
//! 2. The schedule is immutable once constructed; computation is pure
//! 3. FFI boundary is minimal and safe

// Module declarations
pub mod format;
pub mod models;
pub mod schedule;

// Re-exports for convenience
pub use format::{format_currency, round_to_cents};
pub use models::{
    complexity::{Complexity, ParseComplexityError},
    quote::{Quote, QuoteRequest},
    tier::FeeTier,
};
pub use schedule::{FeeSchedule, QuoteError, ScheduleError, DISCOUNT_FACTOR, MIN_BUDGET};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn fee_quoter_core_rs(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<ffi::quoter::PyFeeQuoter>()?;
    Ok(())
}
