//! Fee tier model
//!
//! A tier is one row of the fee schedule: a budget threshold, the base fee
//! quoted at that threshold, and the marginal rate applied to the distance
//! between the budget and the threshold.
//!
//! CRITICAL: All money values are f64 (double precision, matching the fee
//! policy source). No fixed-point arithmetic is used anywhere in the engine.

use serde::{Deserialize, Serialize};

/// One row of a tiered fee schedule
///
/// # Example
/// ```
/// use fee_quoter_core_rs::FeeTier;
///
/// let tier = FeeTier {
///     threshold: 1.0,
///     base_fee: 11341.85,
///     marginal_rate: 0.1753,
/// };
/// assert_eq!(tier.fee_for(1.0), 11341.85);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeTier {
    /// Budget lower bound for this tier, inclusive (currency units)
    pub threshold: f64,

    /// Fee quoted for a budget exactly at the threshold (currency units)
    pub base_fee: f64,

    /// Marginal rate applied per currency unit of distance from the
    /// threshold (fraction in 0..1)
    pub marginal_rate: f64,
}

impl FeeTier {
    /// Fee for a budget mapped to this tier
    ///
    /// Affine in the budget: `base_fee + (budget - threshold) * marginal_rate`.
    /// Under the schedule's lookup rule the selected tier's threshold is
    /// >= the budget, so the offset term is typically <= 0.
    pub fn fee_for(&self, budget: f64) -> f64 {
        self.base_fee + (budget - self.threshold) * self.marginal_rate
    }
}
