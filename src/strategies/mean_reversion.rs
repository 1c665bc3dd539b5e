//! Mean-reversion scorer: fades RSI extremes and stretched MA20 deviations.
//!
//! Deliberately the mirror image of momentum on the RSI extremes: an
//! oversold reading is a rebound opportunity here, not a weakness signal.

use crate::models::signal::{StrategyKind, StrategySignal};
use crate::models::snapshot::IndicatorSnapshot;
use crate::rules::Rule;
use crate::strategies::score_with_rules;

pub const RULES: [Rule; 4] = [
    Rule::OversoldRebound,
    Rule::OverboughtPullback,
    Rule::StretchedBelowMa20,
    Rule::StretchedAboveMa20,
];

pub fn score(snapshot: &IndicatorSnapshot) -> StrategySignal {
    score_with_rules(StrategyKind::MeanReversion, &RULES, snapshot)
}
