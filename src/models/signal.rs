//! Strategy signal model and its derivation enums.

use serde::{Deserialize, Serialize};

/// The three scoring lenses applied to every snapshot. Closed set; extending
/// it means adding a new scorer module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum StrategyKind {
    Momentum,
    MeanReversion,
    Breakout,
}

impl StrategyKind {
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Momentum => "Momentum",
            StrategyKind::MeanReversion => "Mean Reversion",
            StrategyKind::Breakout => "Breakout",
        }
    }
}

/// Direction derived from strength alone: > 60 Buy, < 40 Sell, else Hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SignalAction {
    Buy,
    Sell,
    Hold,
}

/// How far from neutral a strength reading is, independent of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Confidence {
    Strong,
    Moderate,
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// One fired rule and the weight it contributed, kept on the signal so every
/// score is auditable as a sum of rule contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReason {
    pub description: String,
    pub weight: f64,
}

/// Output of one scorer for one snapshot. Created fresh on every evaluation,
/// never mutated; recomputation is idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySignal {
    pub kind: StrategyKind,
    pub strength: f64,
    pub action: SignalAction,
    pub confidence: Confidence,
    pub risk_level: RiskLevel,
    pub recommendation: String,
    pub reasons: Vec<SignalReason>,
}
