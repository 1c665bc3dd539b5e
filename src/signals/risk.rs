//! Risk assessment over the full set of strategy signals.
//!
//! Works on the individual signals rather than the aggregate so it can see
//! disagreement between strategies that the blended score averages away.

use crate::models::risk::{
    PositionPolicy, RiskAssessment, RiskStatistics, RiskWarning, WarningKind,
};
use crate::models::signal::{Confidence, RiskLevel, SignalAction, StrategySignal};

const LOW_RISK_POLICY: PositionPolicy = PositionPolicy {
    position_size: "standard allocation, 10-20% of portfolio",
    stop_loss: "stop-loss 5-8% below entry",
    diversification: "2-3 uncorrelated positions are sufficient",
    monitoring: "review daily at market close",
};

const MEDIUM_RISK_POLICY: PositionPolicy = PositionPolicy {
    position_size: "reduced allocation, 5-10% of portfolio",
    stop_loss: "tighten stop-loss to 3-5% below entry",
    diversification: "spread across 4-5 positions, cap single-name exposure",
    monitoring: "check intraday, at least twice per session",
};

const HIGH_RISK_POLICY: PositionPolicy = PositionPolicy {
    position_size: "minimal allocation, at most 5% of portfolio",
    stop_loss: "hard stop-loss within 2-3% of entry",
    diversification: "keep majority of capital out of this instrument",
    monitoring: "monitor continuously while the position is open",
};

pub struct RiskAssessor;

impl RiskAssessor {
    /// Compute statistics and warnings for one evaluation pass, plus the
    /// position policy for the given overall risk level.
    pub fn assess(signals: &[StrategySignal], overall_risk: RiskLevel) -> RiskAssessment {
        let statistics = Self::statistics(signals);
        RiskAssessment {
            statistics,
            warnings: Self::warnings(&statistics, signals.len()),
            policy: *Self::position_policy(overall_risk),
        }
    }

    pub fn statistics(signals: &[StrategySignal]) -> RiskStatistics {
        let low_risk_count = signals
            .iter()
            .filter(|s| s.risk_level == RiskLevel::Low)
            .count();
        let medium_risk_count = signals
            .iter()
            .filter(|s| s.risk_level == RiskLevel::Medium)
            .count();
        let high_risk_count = signals
            .iter()
            .filter(|s| s.risk_level == RiskLevel::High)
            .count();

        let average_strength = if signals.is_empty() {
            0.0
        } else {
            signals.iter().map(|s| s.strength).sum::<f64>() / signals.len() as f64
        };

        let strong_signal_count = signals
            .iter()
            .filter(|s| s.confidence == Confidence::Strong)
            .count();

        let has_buy = signals.iter().any(|s| s.action == SignalAction::Buy);
        let has_sell = signals.iter().any(|s| s.action == SignalAction::Sell);

        RiskStatistics {
            low_risk_count,
            medium_risk_count,
            high_risk_count,
            average_strength,
            strong_signal_count,
            has_conflicting_signals: has_buy && has_sell,
        }
    }

    /// Fixed, ordered warning conditions. Each is independently appendable;
    /// a pass can emit zero or all of them.
    fn warnings(stats: &RiskStatistics, signal_count: usize) -> Vec<RiskWarning> {
        let mut warnings = Vec::new();

        if stats.high_risk_count > 0 {
            warnings.push(RiskWarning {
                kind: WarningKind::HighRiskStrategy,
                message: format!(
                    "{} strategy signal(s) carry high risk; size positions accordingly",
                    stats.high_risk_count
                ),
            });
        }
        if stats.has_conflicting_signals {
            warnings.push(RiskWarning {
                kind: WarningKind::ConflictingSignals,
                message: "strategies disagree: buy and sell signals are present simultaneously"
                    .to_string(),
            });
        }
        if stats.average_strength < 50.0 {
            warnings.push(RiskWarning {
                kind: WarningKind::WeakSignals,
                message: format!(
                    "average signal strength {:.1} is below neutral",
                    stats.average_strength
                ),
            });
        }
        if stats.strong_signal_count == 0 && signal_count > 0 {
            warnings.push(RiskWarning {
                kind: WarningKind::NoStrongSignal,
                message: "no strong signal present; observation recommended over action"
                    .to_string(),
            });
        }

        warnings
    }

    /// Static position-sizing guidance for a risk level. Exposed so callers
    /// render identical guidance regardless of which strategy triggered the
    /// level.
    pub fn position_policy(risk_level: RiskLevel) -> &'static PositionPolicy {
        match risk_level {
            RiskLevel::Low => &LOW_RISK_POLICY,
            RiskLevel::Medium => &MEDIUM_RISK_POLICY,
            RiskLevel::High => &HIGH_RISK_POLICY,
        }
    }
}
