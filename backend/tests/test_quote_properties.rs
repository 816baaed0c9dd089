//! Property-based tests for the fee engine
//!
//! The engine is a pure function over an immutable schedule, which makes it
//! a good proptest target: determinism, the discount relation, and the
//! error domain all hold for arbitrary valid inputs.

use proptest::prelude::*;

use fee_quoter_core_rs::{Complexity, FeeSchedule, QuoteError, DISCOUNT_FACTOR, MIN_BUDGET};

fn any_complexity() -> impl Strategy<Value = Complexity> {
    prop_oneof![
        Just(Complexity::Low),
        Just(Complexity::Medium),
        Just(Complexity::High),
    ]
}

/// Budgets covered by the builtin schedule (first through last threshold)
fn covered_budget() -> impl Strategy<Value = f64> {
    MIN_BUDGET..=1_040_000_001.0
}

proptest! {
    #[test]
    fn prop_discounted_is_half_primary(budget in covered_budget(), complexity in any_complexity()) {
        let schedule = FeeSchedule::builtin();

        let primary = schedule.primary_fee(budget, complexity).unwrap();
        let discounted = schedule.discounted_fee(budget, complexity).unwrap();

        prop_assert_eq!(discounted.to_bits(), (DISCOUNT_FACTOR * primary).to_bits());
    }

    #[test]
    fn prop_computation_is_deterministic(budget in covered_budget(), complexity in any_complexity()) {
        let schedule = FeeSchedule::builtin();

        let a = schedule.primary_fee(budget, complexity).unwrap();
        let b = schedule.primary_fee(budget, complexity).unwrap();

        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn prop_covered_budgets_always_quote(budget in covered_budget(), complexity in any_complexity()) {
        let schedule = FeeSchedule::builtin();

        let fee = schedule.primary_fee(budget, complexity).unwrap();
        prop_assert!(fee.is_finite());
        prop_assert!(fee > 0.0);
    }

    #[test]
    fn prop_below_minimum_is_rejected(budget in -1.0e12..MIN_BUDGET, complexity in any_complexity()) {
        let schedule = FeeSchedule::builtin();

        let err = schedule.primary_fee(budget, complexity).unwrap_err();
        prop_assert_eq!(err, QuoteError::BudgetBelowMinimum { budget });
    }

    #[test]
    fn prop_above_coverage_is_rejected(
        excess in 1.0..1.0e9,
        complexity in any_complexity(),
    ) {
        let schedule = FeeSchedule::builtin();
        let budget = 1_040_000_001.0 + excess;

        let err = schedule.primary_fee(budget, complexity).unwrap_err();
        prop_assert_eq!(err, QuoteError::NoApplicableTier { budget, complexity });
    }

    #[test]
    fn prop_fee_matches_selected_tier_formula(budget in covered_budget(), complexity in any_complexity()) {
        let schedule = FeeSchedule::builtin();

        // Recompute the lookup independently: first tier at or above budget
        let tier = schedule
            .tiers(complexity)
            .iter()
            .find(|t| t.threshold >= budget)
            .copied()
            .unwrap();

        let expected = tier.base_fee + (budget - tier.threshold) * tier.marginal_rate;
        let fee = schedule.primary_fee(budget, complexity).unwrap();
        prop_assert_eq!(fee.to_bits(), expected.to_bits());
    }
}
