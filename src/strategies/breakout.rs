//! Breakout scorer: directional RSI pushes confirmed by liquid volume.
//!
//! Absent volume never contributes; a breakout claim without liquidity
//! behind it is noise.

use crate::models::signal::{StrategyKind, StrategySignal};
use crate::models::snapshot::IndicatorSnapshot;
use crate::rules::Rule;
use crate::strategies::score_with_rules;

pub const RULES: [Rule; 2] = [Rule::VolumeBreakout, Rule::VolumeBreakdown];

pub fn score(snapshot: &IndicatorSnapshot) -> StrategySignal {
    score_with_rules(StrategyKind::Breakout, &RULES, snapshot)
}
