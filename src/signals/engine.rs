//! Evaluation pipeline: scorers, aggregation, risk assessment, advice.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::models::advice::{AdviceReport, AggregateResult};
use crate::models::risk::RiskAssessment;
use crate::models::signal::StrategySignal;
use crate::models::snapshot::IndicatorSnapshot;
use crate::signals::advice::AdviceGenerator;
use crate::signals::aggregation::Aggregator;
use crate::signals::risk::RiskAssessor;
use crate::strategies;

/// Everything one evaluation pass produces, bundled for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    pub signals: Vec<StrategySignal>,
    pub aggregate: AggregateResult,
    pub risk: RiskAssessment,
    pub advice: AdviceReport,
}

/// Stateless evaluation service. Holds nothing; every call is a fresh,
/// independent pass over the snapshot, so one instance may be shared across
/// threads freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdviceEngine;

impl AdviceEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline for one snapshot. Total: any validated
    /// snapshot, however sparse, produces a complete report.
    pub fn analyze(&self, snapshot: &IndicatorSnapshot) -> AnalysisReport {
        let signals = strategies::score_all(snapshot);

        let aggregate = Aggregator::aggregate(&signals, snapshot);
        let risk = RiskAssessor::assess(&signals, aggregate.risk_level);

        // Ties go to the earliest scorer in evaluation order, keeping the
        // report deterministic.
        let top = signals
            .iter()
            .reduce(|best, s| if s.strength > best.strength { s } else { best })
            .expect("score_all always yields the three strategy signals");

        debug!(
            symbol = %snapshot.symbol,
            top_strategy = top.kind.name(),
            top_strength = top.strength,
            "ranked strategy signals"
        );

        let advice = AdviceGenerator::generate(&aggregate, top);

        info!(
            symbol = %snapshot.symbol,
            overall_score = aggregate.overall_score,
            condition = aggregate.market_condition.label(),
            risk = ?aggregate.risk_level,
            action = %advice.primary_action,
            "analysis complete"
        );

        AnalysisReport {
            symbol: snapshot.symbol.clone(),
            timestamp: snapshot.timestamp,
            signals,
            aggregate,
            risk,
            advice,
        }
    }
}
