//! Unit tests for the risk assessor

use advitrix::models::risk::WarningKind;
use advitrix::models::signal::{
    Confidence, RiskLevel, SignalAction, StrategyKind, StrategySignal,
};
use advitrix::signals::risk::RiskAssessor;

fn signal(action: SignalAction, strength: f64, risk: RiskLevel, confidence: Confidence) -> StrategySignal {
    StrategySignal {
        kind: StrategyKind::Momentum,
        strength,
        action,
        confidence,
        risk_level: risk,
        recommendation: String::new(),
        reasons: Vec::new(),
    }
}

#[test]
fn test_statistics_counts_and_average() {
    let signals = vec![
        signal(SignalAction::Buy, 80.0, RiskLevel::Medium, Confidence::Strong),
        signal(SignalAction::Hold, 50.0, RiskLevel::Low, Confidence::Weak),
        signal(SignalAction::Sell, 20.0, RiskLevel::High, Confidence::Strong),
    ];
    let stats = RiskAssessor::statistics(&signals);
    assert_eq!(stats.low_risk_count, 1);
    assert_eq!(stats.medium_risk_count, 1);
    assert_eq!(stats.high_risk_count, 1);
    assert_eq!(stats.average_strength, 50.0);
    assert_eq!(stats.strong_signal_count, 2);
}

#[test]
fn test_conflicting_signals_requires_buy_and_sell() {
    let no_conflict = vec![
        signal(SignalAction::Buy, 70.0, RiskLevel::Low, Confidence::Moderate),
        signal(SignalAction::Hold, 50.0, RiskLevel::Low, Confidence::Weak),
        signal(SignalAction::Buy, 65.0, RiskLevel::Low, Confidence::Moderate),
    ];
    assert!(!RiskAssessor::statistics(&no_conflict).has_conflicting_signals);

    let conflict = vec![
        signal(SignalAction::Buy, 70.0, RiskLevel::Low, Confidence::Moderate),
        signal(SignalAction::Sell, 30.0, RiskLevel::Low, Confidence::Moderate),
        signal(SignalAction::Hold, 50.0, RiskLevel::Low, Confidence::Weak),
    ];
    assert!(RiskAssessor::statistics(&conflict).has_conflicting_signals);
}

#[test]
fn test_warning_order_is_fixed() {
    // trips every condition: one high-risk, conflicting, weak average, and
    // (not) the no-strong-signal case since strong signals exist
    let signals = vec![
        signal(SignalAction::Buy, 75.0, RiskLevel::High, Confidence::Strong),
        signal(SignalAction::Sell, 25.0, RiskLevel::Low, Confidence::Strong),
        signal(SignalAction::Sell, 20.0, RiskLevel::Low, Confidence::Strong),
    ];
    let assessment = RiskAssessor::assess(&signals, RiskLevel::High);
    let kinds: Vec<WarningKind> = assessment.warnings.iter().map(|w| w.kind).collect();
    assert_eq!(
        kinds,
        vec![
            WarningKind::HighRiskStrategy,
            WarningKind::ConflictingSignals,
            WarningKind::WeakSignals,
        ]
    );
}

#[test]
fn test_no_strong_signal_warning() {
    let signals = vec![
        signal(SignalAction::Hold, 55.0, RiskLevel::Low, Confidence::Moderate),
        signal(SignalAction::Hold, 52.0, RiskLevel::Low, Confidence::Moderate),
        signal(SignalAction::Hold, 50.0, RiskLevel::Low, Confidence::Weak),
    ];
    let assessment = RiskAssessor::assess(&signals, RiskLevel::Low);
    let kinds: Vec<WarningKind> = assessment.warnings.iter().map(|w| w.kind).collect();
    assert_eq!(kinds, vec![WarningKind::NoStrongSignal]);
}

#[test]
fn test_clean_pass_emits_no_warnings() {
    let signals = vec![
        signal(SignalAction::Buy, 80.0, RiskLevel::Medium, Confidence::Strong),
        signal(SignalAction::Buy, 65.0, RiskLevel::Low, Confidence::Moderate),
        signal(SignalAction::Hold, 55.0, RiskLevel::Low, Confidence::Moderate),
    ];
    let assessment = RiskAssessor::assess(&signals, RiskLevel::Medium);
    assert!(assessment.warnings.is_empty());
}

#[test]
fn test_no_signals_no_observation_warning() {
    let assessment = RiskAssessor::assess(&[], RiskLevel::Low);
    assert_eq!(assessment.statistics.average_strength, 0.0);
    assert!(assessment.warnings.is_empty());
}

#[test]
fn test_position_policy_table_is_static_per_level() {
    let low = RiskAssessor::position_policy(RiskLevel::Low);
    let medium = RiskAssessor::position_policy(RiskLevel::Medium);
    let high = RiskAssessor::position_policy(RiskLevel::High);

    assert!(low.position_size.contains("10-20%"));
    assert!(medium.position_size.contains("5-10%"));
    assert!(high.position_size.contains("5%"));

    // same level always yields the same guidance
    assert_eq!(RiskAssessor::position_policy(RiskLevel::High), high);
}
