//! Strategy scorers: three independent lenses over the same snapshot.
//!
//! Every scorer starts from a neutral strength of 50, adds the contributions
//! of its ordered rule table, clamps to [0, 100], and derives action,
//! confidence, and risk level from the result. A snapshot with every
//! optional field absent scores a valid neutral signal, never an error.

pub mod breakout;
pub mod mean_reversion;
pub mod momentum;

use tracing::debug;

use crate::models::signal::{
    Confidence, RiskLevel, SignalAction, SignalReason, StrategyKind, StrategySignal,
};
use crate::models::snapshot::IndicatorSnapshot;
use crate::rules::Rule;

pub const BASE_STRENGTH: f64 = 50.0;

const BUY_THRESHOLD: f64 = 60.0;
const SELL_THRESHOLD: f64 = 40.0;
pub(crate) const STRONG_BAND_HIGH: f64 = 70.0;
pub(crate) const STRONG_BAND_LOW: f64 = 30.0;
pub(crate) const RSI_EXTREME_HIGH: f64 = 80.0;
pub(crate) const RSI_EXTREME_LOW: f64 = 20.0;

/// Score a snapshot under an arbitrary rule table. The canonical scorers
/// are thin wrappers over this; it is public so callers can audit or
/// prototype rule sets against the same derivation logic.
pub fn score_with_rules(
    kind: StrategyKind,
    rules: &[Rule],
    snapshot: &IndicatorSnapshot,
) -> StrategySignal {
    let mut strength = BASE_STRENGTH;
    let mut reasons = Vec::new();

    for rule in rules {
        let outcome = rule.evaluate(snapshot);
        if outcome.matched {
            strength += outcome.weight;
            reasons.push(SignalReason {
                description: rule.description().to_string(),
                weight: outcome.weight,
            });
        }
    }

    let strength = strength.clamp(0.0, 100.0);
    let action = derive_action(strength);
    let confidence = derive_confidence(strength);
    let risk_level = derive_risk_level(strength, snapshot);

    debug!(
        strategy = kind.name(),
        strength,
        action = ?action,
        fired_rules = reasons.len(),
        "scored strategy"
    );

    StrategySignal {
        kind,
        strength,
        action,
        confidence,
        risk_level,
        recommendation: recommendation(kind, action, strength),
        reasons,
    }
}

/// Direction is a function of strength alone, independent of which rules
/// fired.
pub fn derive_action(strength: f64) -> SignalAction {
    if strength > BUY_THRESHOLD {
        SignalAction::Buy
    } else if strength < SELL_THRESHOLD {
        SignalAction::Sell
    } else {
        SignalAction::Hold
    }
}

/// Confidence measures distance from neutral; its thresholds are wider than
/// the action thresholds on purpose.
pub fn derive_confidence(strength: f64) -> Confidence {
    if strength > STRONG_BAND_HIGH || strength < STRONG_BAND_LOW {
        Confidence::Strong
    } else if strength == BASE_STRENGTH {
        Confidence::Weak
    } else {
        Confidence::Moderate
    }
}

/// Risk reflects how extreme the driving indicator is, not how attractive
/// the score looks. A statistical RSI extreme is High risk even on a strong
/// buy reading.
pub fn derive_risk_level(strength: f64, snapshot: &IndicatorSnapshot) -> RiskLevel {
    if snapshot
        .rsi14
        .is_some_and(|rsi| rsi > RSI_EXTREME_HIGH || rsi < RSI_EXTREME_LOW)
    {
        RiskLevel::High
    } else if strength > STRONG_BAND_HIGH || strength < STRONG_BAND_LOW {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn recommendation(kind: StrategyKind, action: SignalAction, strength: f64) -> String {
    let stance = match action {
        SignalAction::Buy => "favors entering",
        SignalAction::Sell => "favors reducing or exiting",
        SignalAction::Hold => "suggests staying on the sidelines",
    };
    format!(
        "{} strategy {} at strength {:.0}/100",
        kind.name(),
        stance,
        strength
    )
}

/// Evaluate all three scorers in their canonical order.
pub fn score_all(snapshot: &IndicatorSnapshot) -> Vec<StrategySignal> {
    vec![
        momentum::score(snapshot),
        mean_reversion::score(snapshot),
        breakout::score(snapshot),
    ]
}
