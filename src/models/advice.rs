//! Aggregate classification and advice report models.

use serde::{Deserialize, Serialize};

use crate::models::signal::RiskLevel;

/// Coarse trend classification derived from RSI and MACD relative position,
/// independent of the strategy scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MarketCondition {
    StrongUptrend,
    StrongDowntrend,
    MildUptrend,
    MildDowntrend,
    Ranging,
}

impl MarketCondition {
    pub fn label(self) -> &'static str {
        match self {
            MarketCondition::StrongUptrend => "strong uptrend",
            MarketCondition::StrongDowntrend => "strong downtrend",
            MarketCondition::MildUptrend => "mild uptrend",
            MarketCondition::MildDowntrend => "mild downtrend",
            MarketCondition::Ranging => "ranging",
        }
    }
}

/// Blend of the three strategy outputs. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub overall_score: f64,
    pub market_condition: MarketCondition,
    pub risk_level: RiskLevel,
}

/// One projected outcome for the advised position.
///
/// The best/neutral/worst probabilities are generated independently and do
/// not sum to 100; present them per-scenario, not as a distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub label: String,
    pub probability: f64,
    pub expected_return_range: String,
    pub timeframe: String,
}

/// Final artifact of an evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceReport {
    pub primary_action: String,
    pub secondary_actions: Vec<String>,
    pub warnings: Vec<String>,
    pub timeframe: String,
    pub scenarios: Vec<Scenario>,
}
