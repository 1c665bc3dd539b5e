//! Unit tests for the named-rule evaluator

use advitrix::models::snapshot::IndicatorSnapshot;
use advitrix::rules::{Rule, VOLUME_FLOOR};

fn snapshot() -> IndicatorSnapshot {
    IndicatorSnapshot::new("TEST", 100.0)
}

#[test]
fn test_absent_field_never_matches() {
    // fail-closed: no rsi, no macd, no ma20, no volume
    let snap = snapshot();
    for rule in [
        Rule::RsiOverbought,
        Rule::RsiOversold,
        Rule::GoldenCross,
        Rule::DeathCross,
        Rule::OversoldRebound,
        Rule::StretchedBelowMa20,
        Rule::VolumeBreakout,
        Rule::VolumeBreakdown,
    ] {
        let outcome = rule.evaluate(&snap);
        assert!(!outcome.matched, "{:?} matched on an empty snapshot", rule);
        assert_eq!(outcome.contribution(), 0.0);
    }
}

#[test]
fn test_matched_rule_contributes_full_weight() {
    let snap = snapshot().with_rsi14(75.0);
    let outcome = Rule::RsiOverbought.evaluate(&snap);
    assert!(outcome.matched);
    assert_eq!(outcome.weight, 20.0);
    assert_eq!(outcome.contribution(), 20.0);
}

#[test]
fn test_rsi_band_boundaries() {
    // the +-10 bands are inclusive; the >70/<30 rules are strict
    let at_70 = snapshot().with_rsi14(70.0);
    assert!(!Rule::RsiOverbought.evaluate(&at_70).matched);
    assert!(Rule::RsiStrengthening.evaluate(&at_70).matched);

    let at_60 = snapshot().with_rsi14(60.0);
    assert!(Rule::RsiStrengthening.evaluate(&at_60).matched);

    let at_30 = snapshot().with_rsi14(30.0);
    assert!(!Rule::RsiOversold.evaluate(&at_30).matched);
    assert!(Rule::RsiWeakening.evaluate(&at_30).matched);

    let at_40 = snapshot().with_rsi14(40.0);
    assert!(Rule::RsiWeakening.evaluate(&at_40).matched);
}

#[test]
fn test_macd_cross_rules() {
    let golden = snapshot().with_macd(1.2, 0.8, 0.4);
    assert!(Rule::GoldenCross.evaluate(&golden).matched);
    assert!(!Rule::DeathCross.evaluate(&golden).matched);

    let death = snapshot().with_macd(-0.5, -0.2, -0.3);
    assert!(Rule::DeathCross.evaluate(&death).matched);

    // dif == dea is neither cross
    let flat = snapshot().with_macd(0.5, 0.5, 0.0);
    assert!(!Rule::GoldenCross.evaluate(&flat).matched);
    assert!(!Rule::DeathCross.evaluate(&flat).matched);
}

#[test]
fn test_ma20_deviation_threshold() {
    // close 100, ma20 96: deviation ~ +4.2%, inside the band
    let inside = IndicatorSnapshot::new("TEST", 100.0).with_ma20(96.0);
    assert!(!Rule::StretchedAboveMa20.evaluate(&inside).matched);
    assert!(!Rule::StretchedBelowMa20.evaluate(&inside).matched);

    // close 106, ma20 100: +6%, stretched above
    let above = IndicatorSnapshot::new("TEST", 106.0).with_ma20(100.0);
    assert!(Rule::StretchedAboveMa20.evaluate(&above).matched);
    assert!(!Rule::StretchedBelowMa20.evaluate(&above).matched);

    // close 94, ma20 100: -6%, stretched below
    let below = IndicatorSnapshot::new("TEST", 94.0).with_ma20(100.0);
    assert!(Rule::StretchedBelowMa20.evaluate(&below).matched);
    assert_eq!(Rule::StretchedBelowMa20.evaluate(&below).weight, 15.0);
}

#[test]
fn test_volume_floor_gates_breakout_rules() {
    let liquid = snapshot().with_rsi14(65.0).with_volume(VOLUME_FLOOR + 1.0);
    assert!(Rule::VolumeBreakout.evaluate(&liquid).matched);

    let illiquid = snapshot().with_rsi14(65.0).with_volume(VOLUME_FLOOR);
    assert!(!Rule::VolumeBreakout.evaluate(&illiquid).matched);

    // strong rsi without any volume reading never fires
    let no_volume = snapshot().with_rsi14(65.0);
    assert!(!Rule::VolumeBreakout.evaluate(&no_volume).matched);

    let breakdown = snapshot().with_rsi14(35.0).with_volume(VOLUME_FLOOR * 2.0);
    assert!(Rule::VolumeBreakdown.evaluate(&breakdown).matched);
    assert_eq!(Rule::VolumeBreakdown.evaluate(&breakdown).weight, -20.0);
}
