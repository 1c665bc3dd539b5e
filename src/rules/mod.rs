//! Named-rule evaluator shared by the strategy scorers.
//!
//! Each rule is a pure predicate over snapshot fields plus a fixed signed
//! weight (positive bullish, negative bearish). A rule whose required field
//! is absent never matches and contributes nothing, so sparse snapshots
//! degrade to neutral instead of failing.

use serde::{Deserialize, Serialize};

use crate::models::snapshot::IndicatorSnapshot;

/// Volume below this floor is treated as illiquid; the breakout rules
/// refuse to fire on it.
pub const VOLUME_FLOOR: f64 = 1_000_000.0;

/// MA20 deviation beyond this magnitude marks price as stretched.
pub const MA20_DEVIATION_THRESHOLD: f64 = 0.05;

/// Closed set of scoring rules. Every scorer is an ordered subset of these,
/// which keeps each strength auditable as a sum of rule contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    RsiOverbought,
    RsiStrengthening,
    RsiOversold,
    RsiWeakening,
    GoldenCross,
    DeathCross,
    OversoldRebound,
    OverboughtPullback,
    StretchedBelowMa20,
    StretchedAboveMa20,
    VolumeBreakout,
    VolumeBreakdown,
}

/// Result of evaluating one rule against one snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleOutcome {
    pub matched: bool,
    pub weight: f64,
}

impl RuleOutcome {
    /// The weight this rule adds to a strength score: its full weight when
    /// matched, zero otherwise.
    pub fn contribution(self) -> f64 {
        if self.matched {
            self.weight
        } else {
            0.0
        }
    }
}

impl Rule {
    pub fn weight(self) -> f64 {
        match self {
            Rule::RsiOverbought => 20.0,
            Rule::RsiStrengthening => 10.0,
            Rule::RsiOversold => -20.0,
            Rule::RsiWeakening => -10.0,
            Rule::GoldenCross => 15.0,
            Rule::DeathCross => -15.0,
            Rule::OversoldRebound => 25.0,
            Rule::OverboughtPullback => -25.0,
            Rule::StretchedBelowMa20 => 15.0,
            Rule::StretchedAboveMa20 => -15.0,
            Rule::VolumeBreakout => 20.0,
            Rule::VolumeBreakdown => -20.0,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Rule::RsiOverbought => "RSI above 70 (overbought momentum)",
            Rule::RsiStrengthening => "RSI in 60-70 band (strengthening)",
            Rule::RsiOversold => "RSI below 30 (oversold momentum)",
            Rule::RsiWeakening => "RSI in 30-40 band (weakening)",
            Rule::GoldenCross => "MACD DIF above DEA (golden cross)",
            Rule::DeathCross => "MACD DIF below DEA (death cross)",
            Rule::OversoldRebound => "RSI below 30 (rebound opportunity)",
            Rule::OverboughtPullback => "RSI above 70 (pullback risk)",
            Rule::StretchedBelowMa20 => "price more than 5% below MA20",
            Rule::StretchedAboveMa20 => "price more than 5% above MA20",
            Rule::VolumeBreakout => "RSI above 60 on liquid volume (upward breakout)",
            Rule::VolumeBreakdown => "RSI below 40 on liquid volume (downward breakout)",
        }
    }

    /// Evaluate this rule against a snapshot. Fail-closed: any absent
    /// required field means no match.
    pub fn evaluate(self, snapshot: &IndicatorSnapshot) -> RuleOutcome {
        let matched = match self {
            Rule::RsiOverbought => snapshot.rsi14.is_some_and(|rsi| rsi > 70.0),
            Rule::RsiStrengthening => snapshot.rsi14.is_some_and(|rsi| (60.0..=70.0).contains(&rsi)),
            Rule::RsiOversold => snapshot.rsi14.is_some_and(|rsi| rsi < 30.0),
            Rule::RsiWeakening => snapshot.rsi14.is_some_and(|rsi| (30.0..=40.0).contains(&rsi)),
            Rule::GoldenCross => snapshot.macd.is_some_and(|macd| macd.dif > macd.dea),
            Rule::DeathCross => snapshot.macd.is_some_and(|macd| macd.dif < macd.dea),
            Rule::OversoldRebound => snapshot.rsi14.is_some_and(|rsi| rsi < 30.0),
            Rule::OverboughtPullback => snapshot.rsi14.is_some_and(|rsi| rsi > 70.0),
            Rule::StretchedBelowMa20 => {
                ma20_deviation(snapshot).is_some_and(|dev| dev < -MA20_DEVIATION_THRESHOLD)
            }
            Rule::StretchedAboveMa20 => {
                ma20_deviation(snapshot).is_some_and(|dev| dev > MA20_DEVIATION_THRESHOLD)
            }
            Rule::VolumeBreakout => {
                snapshot.rsi14.is_some_and(|rsi| rsi > 60.0)
                    && snapshot.volume.is_some_and(|vol| vol > VOLUME_FLOOR)
            }
            Rule::VolumeBreakdown => {
                snapshot.rsi14.is_some_and(|rsi| rsi < 40.0)
                    && snapshot.volume.is_some_and(|vol| vol > VOLUME_FLOOR)
            }
        };

        RuleOutcome {
            matched,
            weight: self.weight(),
        }
    }
}

/// Relative deviation of close from MA20, when MA20 is present.
fn ma20_deviation(snapshot: &IndicatorSnapshot) -> Option<f64> {
    snapshot.ma20.map(|ma20| (snapshot.close - ma20) / ma20)
}
