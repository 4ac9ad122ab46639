//! Per-day expansion of weekday/weekend schedules for charting.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::SleepWindow;
use crate::error::ValidationError;

/// Number of leading days (Mon..Fri) that use the weekday window.
pub const WEEKDAY_COUNT: usize = 5;
/// Number of trailing days (Sat, Sun) that use the weekend window.
pub const WEEKEND_COUNT: usize = 2;

const WEEK: [Weekday; WEEKDAY_COUNT + WEEKEND_COUNT] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Which value of a sleep window is plotted per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Hours asleep (wake - bed)
    #[default]
    Duration,
    /// Unwrapped mid-sleep point
    Midpoint,
}

impl FromStr for DisplayMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "duration" => Ok(DisplayMode::Duration),
            "midpoint" | "mid" => Ok(DisplayMode::Midpoint),
            other => Err(ValidationError::InvalidValue {
                field: "mode".into(),
                message: format!("expected 'duration' or 'midpoint', got '{other}'"),
            }),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Duration => f.write_str("duration"),
            DisplayMode::Midpoint => f.write_str("midpoint"),
        }
    }
}

/// One labelled chart point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPoint {
    pub day: Weekday,
    pub bed_hour: f64,
    pub wake_hour: f64,
    /// Plotted value, chosen by [`DisplayMode`]
    pub value: f64,
}

impl DayPoint {
    fn new(day: Weekday, window: &SleepWindow, mode: DisplayMode) -> Self {
        let value = match mode {
            DisplayMode::Duration => window.duration_hours(),
            DisplayMode::Midpoint => window.mid_sleep(),
        };
        Self {
            day,
            bed_hour: window.bed_hour,
            wake_hour: window.wake_hour,
            value,
        }
    }

    /// Short day label, e.g. `Mon`.
    pub fn label(&self) -> String {
        self.day.to_string()
    }

    /// Hover text: duration plus bed/wake folded into one day.
    pub fn tooltip(&self) -> String {
        format!(
            "Sleep: {:.1}h (from {:.1}h to {:.1}h)",
            self.wake_hour - self.bed_hour,
            self.bed_hour % 24.0,
            self.wake_hour % 24.0
        )
    }
}

/// Expand two windows into seven points ordered Monday through Sunday.
///
/// Monday..Friday repeat the weekday window, Saturday and Sunday repeat the
/// weekend window.
pub fn expand_week(
    weekday: &SleepWindow,
    weekend: &SleepWindow,
    mode: DisplayMode,
) -> Vec<DayPoint> {
    WEEK.iter()
        .enumerate()
        .map(|(i, &day)| {
            let window = if i < WEEKDAY_COUNT { weekday } else { weekend };
            DayPoint::new(day, window, mode)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sleep::normalize_window;

    #[test]
    fn week_is_ordered_monday_first() {
        let wd = normalize_window("23:00", "07:00");
        let we = normalize_window("01:00", "10:00");
        let days = expand_week(&wd, &we, DisplayMode::Duration);

        let labels: Vec<String> = days.iter().map(DayPoint::label).collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    fn first_five_use_weekday_window() {
        let wd = normalize_window("23:00", "07:00");
        let we = normalize_window("01:00", "10:00");
        let days = expand_week(&wd, &we, DisplayMode::Duration);

        assert!(days[..5].iter().all(|d| d.value == 8.0 && d.bed_hour == 23.0));
        assert!(days[5..].iter().all(|d| d.value == 9.0 && d.bed_hour == 1.0));
    }

    #[test]
    fn midpoint_mode_plots_mid_sleep() {
        let wd = normalize_window("23:00", "07:00");
        let we = normalize_window("01:00", "10:00");
        let days = expand_week(&wd, &we, DisplayMode::Midpoint);

        assert_eq!(days[0].value, 27.0);
        assert_eq!(days[6].value, 5.5);
    }

    #[test]
    fn tooltip_folds_clock_values() {
        let wd = normalize_window("23:00", "06:30");
        let days = expand_week(&wd, &wd, DisplayMode::Duration);
        assert_eq!(days[0].tooltip(), "Sleep: 7.5h (from 23.0h to 6.5h)");
    }

    #[test]
    fn display_mode_parses_case_insensitively() {
        assert_eq!("Midpoint".parse::<DisplayMode>().unwrap(), DisplayMode::Midpoint);
        assert_eq!("duration".parse::<DisplayMode>().unwrap(), DisplayMode::Duration);
        assert!("bars".parse::<DisplayMode>().is_err());
    }
}
