//! Domain models for the fee quoter

pub mod complexity;
pub mod quote;
pub mod tier;

// Re-exports
pub use complexity::{Complexity, ParseComplexityError};
pub use quote::{Quote, QuoteRequest};
pub use tier::FeeTier;
