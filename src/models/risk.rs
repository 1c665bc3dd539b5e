//! Risk statistics, warnings, and the position-sizing policy table.

use serde::{Deserialize, Serialize};

/// Summary statistics over one evaluation pass's strategy signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskStatistics {
    pub low_risk_count: usize,
    pub medium_risk_count: usize,
    pub high_risk_count: usize,
    pub average_strength: f64,
    pub strong_signal_count: usize,
    /// True iff at least one Buy and one Sell signal are present at once.
    pub has_conflicting_signals: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum WarningKind {
    HighRiskStrategy,
    ConflictingSignals,
    WeakSignals,
    NoStrongSignal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskWarning {
    pub kind: WarningKind,
    pub message: String,
}

/// Static position-sizing guidance keyed by overall risk level. Lookup
/// tables, not computed values, so every caller renders the same guidance
/// for a given risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionPolicy {
    pub position_size: &'static str,
    pub stop_loss: &'static str,
    pub diversification: &'static str,
    pub monitoring: &'static str,
}

/// Full output of the risk assessor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub statistics: RiskStatistics,
    pub warnings: Vec<RiskWarning>,
    pub policy: PositionPolicy,
}
