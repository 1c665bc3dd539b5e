//! Maps the aggregate read and the top-ranked strategy into a final advice
//! report with scenario projections.

use crate::models::advice::{AdviceReport, AggregateResult, Scenario};
use crate::models::signal::{RiskLevel, SignalAction, StrategySignal};

const BEST_CASE_CAP: f64 = 95.0;
const WORST_CASE_FLOOR: f64 = 10.0;
const NEUTRAL_CASE_PROBABILITY: f64 = 60.0;

pub struct AdviceGenerator;

impl AdviceGenerator {
    pub fn generate(aggregate: &AggregateResult, top: &StrategySignal) -> AdviceReport {
        let direction = direction_for(aggregate.overall_score);
        let condition = aggregate.market_condition.label();

        let (primary_action, secondary_actions, warnings, timeframe) = match direction {
            SignalAction::Buy => (
                "Buy".to_string(),
                vec![
                    format!(
                        "enter in stages rather than all at once; the market is in a {}",
                        condition
                    ),
                    "set a stop-loss before entering, not after".to_string(),
                ],
                vec!["strong scores still lose money without risk control; size within the position policy".to_string()],
                "1-3 weeks".to_string(),
            ),
            SignalAction::Sell => (
                "Sell".to_string(),
                vec![
                    "reduce the position in stages instead of dumping at market".to_string(),
                    format!("re-assess once the {} stabilizes", condition),
                ],
                vec!["exit deliberately; panic selling into weakness gives up the spread".to_string()],
                "1-5 days".to_string(),
            ),
            SignalAction::Hold => (
                "Hold/Observe".to_string(),
                vec![
                    "wait for a clearer signal before committing capital".to_string(),
                    format!("watch for the {} to resolve into a trend", condition),
                ],
                Vec::new(),
                "3-7 days".to_string(),
            ),
        };

        AdviceReport {
            primary_action,
            secondary_actions,
            warnings,
            timeframe: timeframe.clone(),
            scenarios: Self::scenarios(direction, aggregate.risk_level, top.strength, &timeframe),
        }
    }

    /// Deterministic projections keyed off the top strategy's strength.
    ///
    /// The three probabilities are generated independently and do not sum to
    /// 100; this mirrors the upstream behavior and is deliberately not
    /// normalized.
    fn scenarios(
        direction: SignalAction,
        risk_level: RiskLevel,
        top_strength: f64,
        timeframe: &str,
    ) -> Vec<Scenario> {
        let best_probability = (top_strength + 20.0).min(BEST_CASE_CAP);
        let worst_probability = (30.0 - top_strength / 3.0).max(WORST_CASE_FLOOR);

        vec![
            Scenario {
                label: "best case".to_string(),
                probability: best_probability,
                expected_return_range: favorable_return_range(direction, risk_level).to_string(),
                timeframe: timeframe.to_string(),
            },
            Scenario {
                label: "neutral case".to_string(),
                probability: NEUTRAL_CASE_PROBABILITY,
                expected_return_range: "-2% to +2%".to_string(),
                timeframe: timeframe.to_string(),
            },
            Scenario {
                label: "worst case".to_string(),
                probability: worst_probability,
                expected_return_range: adverse_return_range(direction, risk_level).to_string(),
                timeframe: timeframe.to_string(),
            },
        ]
    }
}

fn direction_for(overall_score: f64) -> SignalAction {
    if overall_score > 70.0 {
        SignalAction::Buy
    } else if overall_score < 30.0 {
        SignalAction::Sell
    } else {
        SignalAction::Hold
    }
}

/// Static expected-return table for the scenario that goes the advised way.
fn favorable_return_range(direction: SignalAction, risk_level: RiskLevel) -> &'static str {
    match (direction, risk_level) {
        (SignalAction::Buy, RiskLevel::Low) => "+3% to +8%",
        (SignalAction::Buy, RiskLevel::Medium) => "+5% to +12%",
        (SignalAction::Buy, RiskLevel::High) => "+8% to +20%",
        (SignalAction::Sell, RiskLevel::Low) => "avoid a -3% to -8% drawdown",
        (SignalAction::Sell, RiskLevel::Medium) => "avoid a -5% to -12% drawdown",
        (SignalAction::Sell, RiskLevel::High) => "avoid a -8% to -20% drawdown",
        (SignalAction::Hold, _) => "-3% to +3%",
    }
}

/// Static expected-return table for the scenario that goes against the
/// advice.
fn adverse_return_range(direction: SignalAction, risk_level: RiskLevel) -> &'static str {
    match (direction, risk_level) {
        (SignalAction::Buy, RiskLevel::Low) => "-3% to -6%",
        (SignalAction::Buy, RiskLevel::Medium) => "-5% to -10%",
        (SignalAction::Buy, RiskLevel::High) => "-10% to -18%",
        (SignalAction::Sell, RiskLevel::Low) => "miss a +3% to +6% rebound",
        (SignalAction::Sell, RiskLevel::Medium) => "miss a +5% to +10% rebound",
        (SignalAction::Sell, RiskLevel::High) => "miss a +8% to +15% rebound",
        (SignalAction::Hold, _) => "-5% to +5%",
    }
}
