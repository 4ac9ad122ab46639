//! Wall-clock time of day expressed as fractional hours.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Hours since local midnight, e.g. `07:30` is `7.5`.
///
/// A value parsed leniently from malformed text is NaN.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeOfDay(f64);

impl TimeOfDay {
    /// Wrap a raw hour value.
    pub fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Parse an "HH:MM" string without validation.
    ///
    /// The first two `:`-separated components are read as numbers and
    /// combined as `h + m / 60`. Whitespace around a component is ignored
    /// and an empty component counts as zero; `0x` components are read as
    /// hexadecimal. A missing minute component or a non-numeric component
    /// (including `inf` and `nan` spellings) produces NaN instead of an error.
    pub fn parse_lenient(input: &str) -> Self {
        let mut parts = input.split(':');
        let hours = parts.next().map(parse_component).unwrap_or(f64::NAN);
        let minutes = parts.next().map(parse_component).unwrap_or(f64::NAN);
        Self(hours + minutes / 60.0)
    }

    /// Parse a strict "HH:MM" string in the range 00:00..=23:59.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTime`] when the input is not a valid
    /// wall-clock time.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let time = NaiveTime::parse_from_str(input.trim(), "%H:%M").map_err(|e| {
            ValidationError::InvalidTime {
                input: input.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self(f64::from(time.hour()) + f64::from(time.minute()) / 60.0))
    }

    pub fn hours(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite()
    }
}

fn parse_component(component: &str) -> f64 {
    let trimmed = component.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16).map_or(f64::NAN, |n| n as f64);
    }
    // Rust accepts "inf" and "nan" spellings; those are not numbers here
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => f64::NAN,
    }
}

impl fmt::Display for TimeOfDay {
    /// Formats as `HH:MM`, wrapping values past midnight back into 0..24.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() {
            return write!(f, "--:--");
        }
        let total_minutes = (self.0.rem_euclid(24.0) * 60.0).round() as u32 % (24 * 60);
        write!(f, "{:02}:{:02}", total_minutes / 60, total_minutes % 60)
    }
}

impl From<f64> for TimeOfDay {
    fn from(hours: f64) -> Self {
        Self(hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_parse_fractional_hours() {
        assert_eq!(TimeOfDay::parse_lenient("07:30").hours(), 7.5);
        assert_eq!(TimeOfDay::parse_lenient("23:00").hours(), 23.0);
        assert_eq!(TimeOfDay::parse_lenient("00:45").hours(), 0.75);
    }

    #[test]
    fn lenient_parse_malformed_is_nan() {
        assert!(TimeOfDay::parse_lenient("abc").hours().is_nan());
        assert!(TimeOfDay::parse_lenient("7").hours().is_nan());
        assert!(TimeOfDay::parse_lenient("07:xx").hours().is_nan());
        assert!(!TimeOfDay::parse_lenient("garbage").is_valid());
    }

    #[test]
    fn lenient_parse_infinity_spellings_are_nan() {
        for input in ["inf:00", "infinity:00", "07:INF", "NaN:30", "-inf:00"] {
            assert!(TimeOfDay::parse_lenient(input).hours().is_nan(), "{input}");
        }
        let w = crate::sleep::normalize_window("23:00", "infinity:00");
        assert!(w.wake_hour.is_nan());
    }

    #[test]
    fn lenient_parse_accepts_hex_components() {
        assert_eq!(TimeOfDay::parse_lenient("0x10:00").hours(), 16.0);
        assert!(TimeOfDay::parse_lenient("0xZZ:00").hours().is_nan());
    }

    #[test]
    fn lenient_parse_ignores_trailing_components() {
        assert_eq!(TimeOfDay::parse_lenient("07:30:59").hours(), 7.5);
    }

    #[test]
    fn lenient_parse_empty_component_is_zero() {
        assert_eq!(TimeOfDay::parse_lenient(":30").hours(), 0.5);
    }

    #[test]
    fn strict_parse_matches_lenient_on_valid_input() {
        for input in ["00:00", "06:15", "12:59", "23:45"] {
            assert_eq!(
                TimeOfDay::parse(input).unwrap(),
                TimeOfDay::parse_lenient(input)
            );
        }
    }

    #[test]
    fn strict_parse_rejects_out_of_range() {
        assert!(TimeOfDay::parse("24:00").is_err());
        assert!(TimeOfDay::parse("12:60").is_err());
        assert!(TimeOfDay::parse("noon").is_err());
    }

    #[test]
    fn display_wraps_past_midnight() {
        assert_eq!(TimeOfDay::from_hours(25.5).to_string(), "01:30");
        assert_eq!(TimeOfDay::from_hours(7.25).to_string(), "07:15");
        assert_eq!(TimeOfDay::from_hours(f64::NAN).to_string(), "--:--");
    }
}
