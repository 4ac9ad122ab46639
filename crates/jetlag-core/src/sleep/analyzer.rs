//! Social jetlag analysis of weekday and weekend sleep windows.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{RiskTier, SleepWindow};

/// Result of analyzing one weekday/weekend pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialJetlagReport {
    pub weekday: SleepWindow,
    pub weekend: SleepWindow,
    pub weekday_mid_sleep: f64,
    pub weekend_mid_sleep: f64,
    /// Absolute mid-sleep difference in hours
    pub social_jetlag_hours: f64,
    pub risk: RiskTier,
    pub risk_message: String,
}

/// Current schedule measured against a proposed one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleComparison {
    pub current: SocialJetlagReport,
    pub proposed: SocialJetlagReport,
    /// `current - proposed`; positive when the proposal lowers social jetlag
    pub reduction_hours: f64,
}

impl ScheduleComparison {
    pub fn improves(&self) -> bool {
        self.reduction_hours > 0.0
    }
}

/// Stateless analyzer for sleep window pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepWindowAnalyzer;

impl SleepWindowAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Absolute difference between the two windows' mid-sleep points.
    ///
    /// Symmetric in its arguments.
    pub fn compute_misalignment(&self, weekday: &SleepWindow, weekend: &SleepWindow) -> f64 {
        (weekend.mid_sleep() - weekday.mid_sleep()).abs()
    }

    pub fn classify_risk(&self, metric: f64) -> RiskTier {
        RiskTier::classify(metric)
    }

    /// Full analysis of a weekday/weekend pair.
    pub fn analyze(&self, weekday: &SleepWindow, weekend: &SleepWindow) -> SocialJetlagReport {
        let metric = self.compute_misalignment(weekday, weekend);
        let risk = self.classify_risk(metric);

        if metric.is_finite() {
            debug!(social_jetlag_hours = metric, risk = %risk, "analyzed sleep windows");
        } else {
            warn!(?weekday, ?weekend, "social jetlag is not a number; check time inputs");
        }

        SocialJetlagReport {
            weekday: *weekday,
            weekend: *weekend,
            weekday_mid_sleep: weekday.mid_sleep(),
            weekend_mid_sleep: weekend.mid_sleep(),
            social_jetlag_hours: metric,
            risk,
            risk_message: risk.message().to_string(),
        }
    }

    /// Analyze a current and a proposed schedule side by side.
    pub fn compare(
        &self,
        current: (&SleepWindow, &SleepWindow),
        proposed: (&SleepWindow, &SleepWindow),
    ) -> ScheduleComparison {
        let current = self.analyze(current.0, current.1);
        let proposed = self.analyze(proposed.0, proposed.1);
        let reduction_hours = current.social_jetlag_hours - proposed.social_jetlag_hours;
        ScheduleComparison {
            current,
            proposed,
            reduction_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sleep::normalize_window;

    #[test]
    fn after_midnight_bedtime_is_not_rewrapped() {
        let analyzer = SleepWindowAnalyzer::new();
        let wd = normalize_window("23:00", "07:00");
        let we = normalize_window("01:00", "10:00");

        // weekday mid 27.0, weekend mid 5.5; compared as-is
        assert_eq!(analyzer.compute_misalignment(&wd, &we), 21.5);
    }

    #[test]
    fn misalignment_uses_unwrapped_midpoints() {
        let analyzer = SleepWindowAnalyzer::new();
        let wd = normalize_window("23:00", "07:00");
        let we = normalize_window("23:30", "09:30");

        // 27.0 vs 28.5
        assert_eq!(analyzer.compute_misalignment(&wd, &we), 1.5);
    }

    #[test]
    fn misalignment_is_symmetric() {
        let analyzer = SleepWindowAnalyzer::new();
        let a = normalize_window("22:15", "06:00");
        let b = normalize_window("00:30", "09:45");
        assert_eq!(
            analyzer.compute_misalignment(&a, &b),
            analyzer.compute_misalignment(&b, &a)
        );
    }

    #[test]
    fn analyze_fills_report() {
        let analyzer = SleepWindowAnalyzer::new();
        let wd = normalize_window("23:00", "07:00");
        let we = normalize_window("23:30", "07:30");
        let report = analyzer.analyze(&wd, &we);

        assert_eq!(report.weekday_mid_sleep, 27.0);
        assert_eq!(report.weekend_mid_sleep, 27.5);
        assert_eq!(report.social_jetlag_hours, 0.5);
        assert_eq!(report.risk, RiskTier::Low);
        assert_eq!(report.risk_message, RiskTier::Low.message());
    }

    #[test]
    fn analyze_malformed_input_is_nan_and_high() {
        let analyzer = SleepWindowAnalyzer::new();
        let wd = normalize_window("??", "07:00");
        let we = normalize_window("23:30", "07:30");
        let report = analyzer.analyze(&wd, &we);

        assert!(report.social_jetlag_hours.is_nan());
        assert_eq!(report.risk, RiskTier::High);
    }

    #[test]
    fn compare_reports_reduction() {
        let analyzer = SleepWindowAnalyzer::new();
        let cur_wd = normalize_window("23:00", "07:00");
        let cur_we = normalize_window("23:00", "10:00");
        let fix_wd = normalize_window("23:00", "07:00");
        let fix_we = normalize_window("23:00", "08:00");

        let cmp = analyzer.compare((&cur_wd, &cur_we), (&fix_wd, &fix_we));
        assert_eq!(cmp.current.social_jetlag_hours, 1.5);
        assert_eq!(cmp.proposed.social_jetlag_hours, 0.5);
        assert_eq!(cmp.reduction_hours, 1.0);
        assert!(cmp.improves());
    }
}
