//! Built-in fee tables
//!
//! The reference schedule: twelve tiers per complexity category, covering
//! budgets from 1 up to 1,040,000,001 currency units. Values are the
//! published professional-fee guideline figures and must not be rounded,
//! re-derived, or otherwise "cleaned up".

use std::collections::HashMap;

use crate::models::complexity::Complexity;
use crate::models::tier::FeeTier;

use super::FeeSchedule;

const fn tier(threshold: f64, base_fee: f64, marginal_rate: f64) -> FeeTier {
    FeeTier {
        threshold,
        base_fee,
        marginal_rate,
    }
}

const LOW: [FeeTier; 12] = [
    tier(1.0, 11_341.85, 0.1753),
    tier(200_001.0, 46_393.33, 0.1685),
    tier(650_001.0, 122_193.97, 0.1243),
    tier(2_000_001.0, 289_927.74, 0.1083),
    tier(4_000_001.0, 506_559.80, 0.1055),
    tier(6_500_001.0, 770_251.28, 0.0916),
    tier(13_000_001.0, 1_365_321.64, 0.0886),
    tier(40_000_001.0, 3_755_421.23, 0.0885),
    tier(130_000_001.0, 11_717_437.86, 0.0828),
    tier(260_000_001.0, 22_475_739.42, 0.0808),
    tier(520_000_001.0, 43_501_431.14, 0.0788),
    tier(1_040_000_001.0, 84_483_711.59, 0.0728),
];

const MEDIUM: [FeeTier; 12] = [
    tier(1.0, 13_570.07, 0.2096),
    tier(200_001.0, 55_507.74, 0.2016),
    tier(650_001.0, 146_200.15, 0.1487),
    tier(2_000_001.0, 346_886.84, 0.1296),
    tier(4_000_001.0, 606_078.35, 0.1262),
    tier(6_500_001.0, 921_574.57, 0.1095),
    tier(13_000_001.0, 1_633_552.23, 0.106),
    tier(40_000_001.0, 4_493_209.93, 0.1059),
    tier(130_000_001.0, 14_019_441.47, 0.0991),
    tier(260_000_001.0, 26_891_315.09, 0.0968),
    tier(520_000_001.0, 52_047_706.61, 0.0943),
    tier(1_040_000_001.0, 101_081_351.13, 0.0871),
];

const HIGH: [FeeTier; 12] = [
    tier(1.0, 15_798.28, 0.2441),
    tier(200_001.0, 64_622.16, 0.2347),
    tier(650_001.0, 170_206.35, 0.1731),
    tier(2_000_001.0, 403_845.93, 0.1509),
    tier(4_000_001.0, 705_596.92, 0.1469),
    tier(6_500_001.0, 1_072_897.87, 0.1276),
    tier(13_000_001.0, 1_901_782.84, 0.1233),
    tier(40_000_001.0, 5_230_998.63, 0.1233),
    tier(130_000_001.0, 16_321_445.09, 0.1152),
    tier(260_000_001.0, 31_306_890.75, 0.1126),
    tier(520_000_001.0, 60_593_982.10, 0.1098),
    tier(1_040_000_001.0, 117_678_990.65, 0.1016),
];

impl FeeSchedule {
    /// The built-in reference schedule
    ///
    /// Constructed fresh on each call; construct once at startup and share
    /// by reference.
    pub fn builtin() -> Self {
        let mut tiers = HashMap::new();
        tiers.insert(Complexity::Low, LOW.to_vec());
        tiers.insert(Complexity::Medium, MEDIUM.to_vec());
        tiers.insert(Complexity::High, HIGH.to_vec());

        // The constant tables satisfy the schedule invariants
        Self::new(tiers).expect("builtin fee tables are valid")
    }
}
