//! Blends the strategy signals into an overall score, a market-condition
//! label, and an aggregate risk level.

use crate::models::advice::{AggregateResult, MarketCondition};
use crate::models::signal::{RiskLevel, StrategySignal};
use crate::models::snapshot::IndicatorSnapshot;
use crate::strategies::{RSI_EXTREME_HIGH, RSI_EXTREME_LOW, STRONG_BAND_HIGH, STRONG_BAND_LOW};

pub struct Aggregator;

impl Aggregator {
    pub fn aggregate(signals: &[StrategySignal], snapshot: &IndicatorSnapshot) -> AggregateResult {
        let overall_score = Self::overall_score(signals);
        AggregateResult {
            overall_score,
            market_condition: Self::classify_market(snapshot),
            risk_level: Self::risk_level(overall_score, snapshot),
        }
    }

    /// Rounded mean of the strategy strengths.
    pub fn overall_score(signals: &[StrategySignal]) -> f64 {
        if signals.is_empty() {
            return 0.0;
        }
        let sum: f64 = signals.iter().map(|s| s.strength).sum();
        (sum / signals.len() as f64).round()
    }

    /// Trend classification from RSI and MACD relative position. Evaluated
    /// in fixed priority order, first match wins; any required field absent
    /// falls through to Ranging.
    pub fn classify_market(snapshot: &IndicatorSnapshot) -> MarketCondition {
        let (rsi, macd) = match (snapshot.rsi14, snapshot.macd) {
            (Some(rsi), Some(macd)) => (rsi, macd),
            _ => return MarketCondition::Ranging,
        };

        if rsi > 70.0 && macd.dif > macd.dea {
            MarketCondition::StrongUptrend
        } else if rsi < 30.0 && macd.dif < macd.dea {
            MarketCondition::StrongDowntrend
        } else if rsi > 50.0 && macd.dif > macd.dea {
            MarketCondition::MildUptrend
        } else if rsi < 50.0 && macd.dif < macd.dea {
            MarketCondition::MildDowntrend
        } else {
            MarketCondition::Ranging
        }
    }

    /// Aggregate risk. An RSI statistical extreme dominates everything; a
    /// strong reading in either the blended score or the RSI band elevates
    /// to Medium.
    pub fn risk_level(overall_score: f64, snapshot: &IndicatorSnapshot) -> RiskLevel {
        if snapshot
            .rsi14
            .is_some_and(|rsi| rsi > RSI_EXTREME_HIGH || rsi < RSI_EXTREME_LOW)
        {
            return RiskLevel::High;
        }

        let score_extreme = overall_score > STRONG_BAND_HIGH || overall_score < STRONG_BAND_LOW;
        let rsi_strong_band = snapshot
            .rsi14
            .is_some_and(|rsi| rsi > STRONG_BAND_HIGH || rsi < STRONG_BAND_LOW);

        if score_extreme || rsi_strong_band {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}
