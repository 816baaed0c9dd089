//! Tiered fee schedule and fee computation
//!
//! The schedule maps each complexity category to an ordered list of fee
//! tiers. Given a budget, the engine selects the tier with the **smallest
//! threshold >= budget** and evaluates the tier's affine fee formula.
//!
//! That lookup direction is the inverse of the usual progressive-bracket
//! convention (largest threshold <= budget). It is the fee policy as
//! published, reproduced here exactly; see the policy note in DESIGN.md
//! before "fixing" it.
//!
//! The schedule is validated at construction and never mutated afterwards,
//! so computation is a pure function of (budget, category) and the schedule
//! is safe to share by reference across callers.

pub mod builtin;

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::models::complexity::Complexity;
use crate::models::quote::{Quote, QuoteRequest};
use crate::models::tier::FeeTier;

/// Minimum permissible budget (currency units)
///
/// Equals the first threshold of every category's tier list.
pub const MIN_BUDGET: f64 = 1.0;

/// Fixed factor applied to the primary fee to produce the discounted fee
pub const DISCOUNT_FACTOR: f64 = 0.5;

/// Errors that can occur while computing a fee
#[derive(Debug, Error, PartialEq)]
pub enum QuoteError {
    #[error("budget {budget} is below the minimum of {MIN_BUDGET}")]
    BudgetBelowMinimum { budget: f64 },

    #[error("no applicable fee tier for budget {budget} in the {complexity} schedule")]
    NoApplicableTier { budget: f64, complexity: Complexity },
}

/// Errors that can occur while constructing or loading a schedule
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("category {complexity} has no fee tiers")]
    EmptyCategory { complexity: Complexity },

    #[error("category {complexity} has a duplicate or non-increasing threshold at tier {index}")]
    NonIncreasingThresholds { complexity: Complexity, index: usize },

    #[error("category {complexity} starts at threshold {threshold}, expected {MIN_BUDGET}")]
    BadFirstThreshold { complexity: Complexity, threshold: f64 },

    #[error("schedule configuration is not valid JSON: {message}")]
    Parse { message: String },
}

/// Immutable per-category table of fee tiers
///
/// Construct once (via [`FeeSchedule::builtin`], [`FeeSchedule::new`], or
/// [`FeeSchedule::from_json`]) and pass by reference to computation calls.
///
/// # Example
/// ```
/// use fee_quoter_core_rs::{Complexity, FeeSchedule};
///
/// let schedule = FeeSchedule::builtin();
/// let fee = schedule.primary_fee(1.0, Complexity::Low).unwrap();
/// assert_eq!(fee, 11341.85);
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct FeeSchedule {
    tiers: HashMap<Complexity, Vec<FeeTier>>,
}

impl FeeSchedule {
    /// Build a schedule from per-category tier lists
    ///
    /// Tier lists are sorted ascending by threshold, then validated:
    /// every category must be non-empty, thresholds must strictly increase,
    /// and the first threshold must equal [`MIN_BUDGET`].
    ///
    /// # Errors
    /// Returns a [`ScheduleError`] describing the first violation found.
    pub fn new(mut tiers: HashMap<Complexity, Vec<FeeTier>>) -> Result<Self, ScheduleError> {
        for complexity in Complexity::ALL {
            let list = tiers
                .get_mut(&complexity)
                .filter(|list| !list.is_empty())
                .ok_or(ScheduleError::EmptyCategory { complexity })?;

            list.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));

            let first = list[0].threshold;
            if first != MIN_BUDGET {
                return Err(ScheduleError::BadFirstThreshold {
                    complexity,
                    threshold: first,
                });
            }

            for index in 1..list.len() {
                if list[index].threshold <= list[index - 1].threshold {
                    return Err(ScheduleError::NonIncreasingThresholds { complexity, index });
                }
            }
        }

        Ok(Self { tiers })
    }

    /// Load a schedule from a JSON document
    ///
    /// The document maps lowercase category labels to tier arrays:
    ///
    /// ```json
    /// { "low": [{ "threshold": 1, "base_fee": 11341.85, "marginal_rate": 0.1753 }], ... }
    /// ```
    ///
    /// Applies the same validation as [`FeeSchedule::new`].
    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        let tiers: HashMap<Complexity, Vec<FeeTier>> =
            serde_json::from_str(json).map_err(|e| ScheduleError::Parse {
                message: e.to_string(),
            })?;
        Self::new(tiers)
    }

    /// Serialize the schedule back to its JSON configuration form
    pub fn to_json(&self) -> String {
        // Serialization of a validated schedule cannot fail
        serde_json::to_string_pretty(&self.tiers).unwrap_or_default()
    }

    /// Tier list for a category, ascending by threshold
    pub fn tiers(&self, complexity: Complexity) -> &[FeeTier] {
        // Every category is guaranteed present by construction
        self.tiers
            .get(&complexity)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Select the tier that applies to a budget
    ///
    /// The applicable tier is the one with the smallest threshold >= budget.
    /// Since the list is ascending, that is the first tier whose threshold
    /// reaches the budget.
    fn applicable_tier(
        &self,
        budget: f64,
        complexity: Complexity,
    ) -> Result<&FeeTier, QuoteError> {
        self.tiers(complexity)
            .iter()
            .find(|tier| tier.threshold >= budget)
            .ok_or(QuoteError::NoApplicableTier { budget, complexity })
    }

    /// Compute the primary fee for a budget and category
    ///
    /// # Errors
    /// - [`QuoteError::BudgetBelowMinimum`] if `budget < MIN_BUDGET`
    /// - [`QuoteError::NoApplicableTier`] if the budget exceeds the largest
    ///   threshold in the category's table
    ///
    /// # Example
    /// ```
    /// use fee_quoter_core_rs::{Complexity, FeeSchedule};
    ///
    /// let schedule = FeeSchedule::builtin();
    /// let fee = schedule.primary_fee(100_000.0, Complexity::Low).unwrap();
    /// assert!((fee - 29_543.1615).abs() < 1e-9);
    /// ```
    pub fn primary_fee(&self, budget: f64, complexity: Complexity) -> Result<f64, QuoteError> {
        if budget < MIN_BUDGET {
            return Err(QuoteError::BudgetBelowMinimum { budget });
        }

        let tier = self.applicable_tier(budget, complexity)?;
        Ok(tier.fee_for(budget))
    }

    /// Compute the discounted fee for a budget and category
    ///
    /// The discounted fee is the primary fee scaled by [`DISCOUNT_FACTOR`].
    /// Same preconditions and errors as [`FeeSchedule::primary_fee`].
    pub fn discounted_fee(&self, budget: f64, complexity: Complexity) -> Result<f64, QuoteError> {
        Ok(DISCOUNT_FACTOR * self.primary_fee(budget, complexity)?)
    }

    /// Compute a full quote for a request
    ///
    /// Convenience over calling both fee operations; the reference
    /// presentation shows both fees per category side by side.
    pub fn quote(&self, request: QuoteRequest) -> Result<Quote, QuoteError> {
        let primary_fee = self.primary_fee(request.budget, request.complexity)?;
        let discounted_fee = DISCOUNT_FACTOR * primary_fee;
        Ok(Quote::assemble(request, primary_fee, discounted_fee))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(threshold: f64, base_fee: f64, marginal_rate: f64) -> FeeTier {
        FeeTier {
            threshold,
            base_fee,
            marginal_rate,
        }
    }

    fn small_schedule() -> FeeSchedule {
        let mut tiers = HashMap::new();
        for complexity in Complexity::ALL {
            tiers.insert(
                complexity,
                vec![tier(1.0, 100.0, 0.10), tier(1_000.0, 500.0, 0.05)],
            );
        }
        FeeSchedule::new(tiers).unwrap()
    }

    #[test]
    fn test_new_sorts_tiers_before_validation() {
        let mut tiers = HashMap::new();
        for complexity in Complexity::ALL {
            // Deliberately out of order; construction must sort
            tiers.insert(
                complexity,
                vec![tier(1_000.0, 500.0, 0.05), tier(1.0, 100.0, 0.10)],
            );
        }
        let schedule = FeeSchedule::new(tiers).unwrap();
        assert_eq!(schedule.tiers(Complexity::Low)[0].threshold, 1.0);
    }

    #[test]
    fn test_missing_category_is_rejected() {
        let mut tiers = HashMap::new();
        tiers.insert(Complexity::Low, vec![tier(1.0, 100.0, 0.10)]);

        let err = FeeSchedule::new(tiers).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::EmptyCategory {
                complexity: Complexity::Medium
            }
        );
    }

    #[test]
    fn test_duplicate_threshold_is_rejected() {
        let mut tiers = HashMap::new();
        for complexity in Complexity::ALL {
            tiers.insert(
                complexity,
                vec![tier(1.0, 100.0, 0.10), tier(1.0, 200.0, 0.20)],
            );
        }

        let err = FeeSchedule::new(tiers).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::NonIncreasingThresholds {
                complexity: Complexity::Low,
                index: 1
            }
        );
    }

    #[test]
    fn test_first_threshold_must_be_minimum_budget() {
        let mut tiers = HashMap::new();
        for complexity in Complexity::ALL {
            tiers.insert(complexity, vec![tier(10.0, 100.0, 0.10)]);
        }

        let err = FeeSchedule::new(tiers).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::BadFirstThreshold {
                complexity: Complexity::Low,
                threshold: 10.0
            }
        );
    }

    #[test]
    fn test_lookup_selects_smallest_threshold_at_or_above_budget() {
        let schedule = small_schedule();

        // Budget between the two thresholds maps to the *upper* tier
        let fee = schedule.primary_fee(500.0, Complexity::Low).unwrap();
        // 500.0 + (500 - 1000) * 0.05 = 475.0
        assert_eq!(fee, 475.0);
    }

    #[test]
    fn test_budget_at_threshold_pays_base_fee_exactly() {
        let schedule = small_schedule();
        assert_eq!(schedule.primary_fee(1.0, Complexity::Low).unwrap(), 100.0);
        assert_eq!(
            schedule.primary_fee(1_000.0, Complexity::High).unwrap(),
            500.0
        );
    }

    #[test]
    fn test_budget_below_minimum_is_invalid_input() {
        let schedule = small_schedule();
        for budget in [0.0, -5.0, 0.999] {
            let err = schedule.primary_fee(budget, Complexity::Low).unwrap_err();
            assert_eq!(err, QuoteError::BudgetBelowMinimum { budget });
        }
    }

    #[test]
    fn test_budget_above_last_threshold_has_no_tier() {
        let schedule = small_schedule();
        let err = schedule
            .primary_fee(1_000.5, Complexity::Medium)
            .unwrap_err();
        assert_eq!(
            err,
            QuoteError::NoApplicableTier {
                budget: 1_000.5,
                complexity: Complexity::Medium
            }
        );
    }

    #[test]
    fn test_discounted_fee_is_half_primary() {
        let schedule = small_schedule();
        let primary = schedule.primary_fee(500.0, Complexity::Low).unwrap();
        let discounted = schedule.discounted_fee(500.0, Complexity::Low).unwrap();
        assert_eq!(discounted, DISCOUNT_FACTOR * primary);
    }

    #[test]
    fn test_quote_carries_both_fees() {
        let schedule = small_schedule();
        let quote = schedule
            .quote(QuoteRequest::new(500.0, Complexity::Low))
            .unwrap();
        assert_eq!(quote.primary_fee, 475.0);
        assert_eq!(quote.discounted_fee, 237.5);
    }

    #[test]
    fn test_quote_propagates_errors() {
        let schedule = small_schedule();
        let err = schedule
            .quote(QuoteRequest::new(0.0, Complexity::Low))
            .unwrap_err();
        assert_eq!(err, QuoteError::BudgetBelowMinimum { budget: 0.0 });
    }

    #[test]
    fn test_from_json_round_trip() {
        let schedule = small_schedule();
        let json = schedule.to_json();
        let reloaded = FeeSchedule::from_json(&json).unwrap();

        assert_eq!(
            reloaded.primary_fee(500.0, Complexity::Low).unwrap(),
            schedule.primary_fee(500.0, Complexity::Low).unwrap()
        );
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let err = FeeSchedule::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ScheduleError::Parse { .. }));
    }

    #[test]
    fn test_from_json_validates_thresholds() {
        let json = r#"{
            "low": [{ "threshold": 5.0, "base_fee": 1.0, "marginal_rate": 0.1 }],
            "medium": [{ "threshold": 1.0, "base_fee": 1.0, "marginal_rate": 0.1 }],
            "high": [{ "threshold": 1.0, "base_fee": 1.0, "marginal_rate": 0.1 }]
        }"#;
        let err = FeeSchedule::from_json(json).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::BadFirstThreshold {
                complexity: Complexity::Low,
                threshold: 5.0
            }
        );
    }
}
