//! Text charts for terminal output.

use chrono::Weekday;
use jetlag_core::{AlertnessProfile, DayPoint, DisplayMode, TimeOfDay};

const RULE_WIDTH: usize = 50;

/// A bar of `value` scaled into `min..=max` over `width` cells.
///
/// Non-finite values and an empty range draw an empty bar.
pub fn bar(value: f64, min: f64, max: f64, width: usize) -> String {
    let span = max - min;
    let filled = if value.is_finite() && span.is_finite() && span > 0.0 {
        (((value - min) / span).clamp(0.0, 1.0) * width as f64).round() as usize
    } else {
        0
    };
    format!("{}{}", "█".repeat(filled), " ".repeat(width - filled))
}

/// One decimal place, with halves rounded away from zero (1.25 shows as 1.3).
///
/// `{:.1}` alone rounds the binary value, so 1.25 would print as 1.2.
pub fn one_decimal(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

fn format_value(value: f64, mode: DisplayMode) -> String {
    if !value.is_finite() {
        return "NaN".to_string();
    }
    match mode {
        DisplayMode::Duration => format!("{}h", one_decimal(value)),
        DisplayMode::Midpoint => {
            format!("{}h ({})", one_decimal(value), TimeOfDay::from_hours(value))
        }
    }
}

/// Seven rows, Monday first, each with its bar, value and tooltip text.
pub fn render_week(
    points: &[DayPoint],
    mode: DisplayMode,
    width: usize,
    today: Option<Weekday>,
) -> String {
    let max = points
        .iter()
        .map(|p| p.value)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    let title = match mode {
        DisplayMode::Duration => "Sleep duration (hours)",
        DisplayMode::Midpoint => "Mid-sleep point (hours)",
    };
    let mut output = format!("\n{title}:\n");
    output.push_str(&"─".repeat(RULE_WIDTH));
    output.push('\n');

    for point in points {
        let marker = if Some(point.day) == today { "  ◀ today" } else { "" };
        output.push_str(&format!(
            "{} {} {:<16} {}{}\n",
            point.label(),
            bar(point.value, 0.0, max, width),
            format_value(point.value, mode),
            point.tooltip(),
            marker
        ));
    }

    output.push_str(&"─".repeat(RULE_WIDTH));
    output.push('\n');
    output
}

/// 24 rows of relative alertness scaled between the day's trough and peak.
pub fn render_alertness(profile: &AlertnessProfile, width: usize) -> String {
    let (min, max) = profile.range().unwrap_or((0.0, 0.0));
    let peak = profile.peak().map(|p| p.hour);
    let trough = profile.trough().map(|p| p.hour);

    let mut output = String::from("\nRelative alertness:\n");
    output.push_str(&"─".repeat(RULE_WIDTH));
    output.push('\n');

    for point in &profile.points {
        let indicator = if Some(point.hour) == peak {
            "● peak"
        } else if Some(point.hour) == trough {
            "○ trough"
        } else {
            ""
        };
        output.push_str(&format!(
            "{:>5} {} {:>6.2} {}\n",
            point.label(),
            bar(point.alertness, min, max, width),
            point.alertness,
            indicator
        ));
    }

    output.push_str(&"─".repeat(RULE_WIDTH));
    output.push('\n');
    output
}
