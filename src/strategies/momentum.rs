//! Momentum scorer: rides RSI strength bands and MACD crossovers.

use crate::models::signal::{StrategyKind, StrategySignal};
use crate::models::snapshot::IndicatorSnapshot;
use crate::rules::Rule;
use crate::strategies::score_with_rules;

/// Ordered rule table. The RSI bands are mutually exclusive; the crossover
/// rules add on top of whichever band fired.
pub const RULES: [Rule; 6] = [
    Rule::RsiOverbought,
    Rule::RsiStrengthening,
    Rule::RsiOversold,
    Rule::RsiWeakening,
    Rule::GoldenCross,
    Rule::DeathCross,
];

pub fn score(snapshot: &IndicatorSnapshot) -> StrategySignal {
    score_with_rules(StrategyKind::Momentum, &RULES, snapshot)
}
