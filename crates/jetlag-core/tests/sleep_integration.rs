//! Integration tests for social jetlag analysis.

use jetlag_core::{
    expand_week, normalize_window, DisplayMode, RiskTier, SleepWindow, SleepWindowAnalyzer,
};
use proptest::prelude::*;

#[test]
fn test_full_social_jetlag_workflow() {
    let analyzer = SleepWindowAnalyzer::new();

    // Weekdays 23:00-07:00, weekends 23:30-10:30
    let weekday = normalize_window("23:00", "07:00");
    let weekend = normalize_window("23:30", "10:30");

    let report = analyzer.analyze(&weekday, &weekend);
    assert_eq!(report.weekday_mid_sleep, 27.0);
    assert_eq!(report.weekend_mid_sleep, 29.0);
    assert_eq!(report.social_jetlag_hours, 2.0);
    assert_eq!(report.risk, RiskTier::High);

    let week = expand_week(&weekday, &weekend, DisplayMode::Duration);
    assert_eq!(week.len(), 7);
    let durations: Vec<f64> = week.iter().map(|d| d.value).collect();
    assert_eq!(durations, [8.0, 8.0, 8.0, 8.0, 8.0, 11.0, 11.0]);
}

#[test]
fn test_risk_tier_boundaries_through_analyzer() {
    let analyzer = SleepWindowAnalyzer::new();
    assert_eq!(analyzer.classify_risk(0.99), RiskTier::Low);
    assert_eq!(analyzer.classify_risk(1.0), RiskTier::Moderate);
    assert_eq!(analyzer.classify_risk(2.0), RiskTier::High);
}

#[test]
fn test_identical_schedules_have_no_jetlag() {
    let analyzer = SleepWindowAnalyzer::new();
    let w = normalize_window("22:45", "06:15");
    let report = analyzer.analyze(&w, &w);
    assert_eq!(report.social_jetlag_hours, 0.0);
    assert_eq!(report.risk, RiskTier::Low);
}

#[test]
fn test_strict_and_lenient_agree_on_valid_input() {
    let strict = SleepWindow::try_from_strs("23:15", "06:45").unwrap();
    let lenient = normalize_window("23:15", "06:45");
    assert_eq!(strict, lenient);
    assert!(SleepWindow::try_from_strs("23:15", "6.45").is_err());
}

#[test]
fn test_report_serializes_to_json() {
    let analyzer = SleepWindowAnalyzer::new();
    let report = analyzer.analyze(
        &normalize_window("23:00", "07:00"),
        &normalize_window("00:00", "09:00"),
    );
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["risk"], "high");
    assert_eq!(json["weekday"]["bed_hour"], 23.0);
}

fn clock_string() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{h:02}:{m:02}"))
}

proptest! {
    #[test]
    fn prop_window_invariants(bed in clock_string(), wake in clock_string()) {
        let w = normalize_window(&bed, &wake);
        prop_assert!(w.wake_hour > w.bed_hour);
        // equal bed and wake strings span exactly one full day
        prop_assert!(w.wake_hour <= w.bed_hour + 24.0);
        prop_assert!(w.duration_hours() <= 24.0);
        prop_assert!((0.0..24.0).contains(&w.bed_hour));
    }

    #[test]
    fn prop_misalignment_symmetric(
        a_bed in clock_string(), a_wake in clock_string(),
        b_bed in clock_string(), b_wake in clock_string()
    ) {
        let analyzer = SleepWindowAnalyzer::new();
        let a = normalize_window(&a_bed, &a_wake);
        let b = normalize_window(&b_bed, &b_wake);
        let ab = analyzer.compute_misalignment(&a, &b);
        let ba = analyzer.compute_misalignment(&b, &a);
        prop_assert_eq!(ab.to_bits(), ba.to_bits());
        prop_assert!(ab >= 0.0);
    }

    #[test]
    fn prop_analysis_is_idempotent(bed in clock_string(), wake in clock_string()) {
        let analyzer = SleepWindowAnalyzer::new();
        let wd = normalize_window("23:00", "07:00");
        let we = normalize_window(&bed, &wake);
        let first = analyzer.analyze(&wd, &we);
        let second = analyzer.analyze(&wd, &we);
        prop_assert_eq!(first.social_jetlag_hours.to_bits(), second.social_jetlag_hours.to_bits());
        prop_assert_eq!(first.risk, second.risk);
    }
}
