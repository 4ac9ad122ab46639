//! Alertness curve inputs and computation.
//!
//! The curve is a heuristic, not a fitted physiological model. Each hour's
//! value is the sum of five terms:
//!
//! - a cosine circadian baseline with its peak at 04:00 and trough at 16:00
//! - a morning-light boost, Gaussian around 09:00
//! - an evening-light drag, Gaussian around 22:00
//! - a flat bonus for schedule consistency
//! - a flat caffeine bump from 16:00 until `24 - caffeine_cutoff`

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Number of points in a curve.
pub const HOURS_PER_DAY: usize = 24;

/// The four knobs driving the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertnessInputs {
    /// Morning light exposure level
    #[serde(default = "default_level")]
    pub morning_light: f64,
    /// Evening light exposure level
    #[serde(default = "default_level")]
    pub evening_light: f64,
    /// Schedule consistency level
    #[serde(default = "default_level")]
    pub consistency: f64,
    /// Caffeine cutoff, hours before midnight
    #[serde(default = "default_caffeine_cutoff")]
    pub caffeine_cutoff: f64,
}

fn default_level() -> f64 {
    5.0
}
fn default_caffeine_cutoff() -> f64 {
    8.0
}

impl Default for AlertnessInputs {
    fn default() -> Self {
        Self {
            morning_light: default_level(),
            evening_light: default_level(),
            consistency: default_level(),
            caffeine_cutoff: default_caffeine_cutoff(),
        }
    }
}

impl AlertnessInputs {
    pub fn new(
        morning_light: f64,
        evening_light: f64,
        consistency: f64,
        caffeine_cutoff: f64,
    ) -> Self {
        Self {
            morning_light,
            evening_light,
            consistency,
            caffeine_cutoff,
        }
    }

    /// Relative alertness at an hour of the day.
    pub fn alertness_at(&self, hour: u8) -> f64 {
        let h = f64::from(hour);
        let base = -(((h - 16.0) / 24.0) * 2.0 * PI).cos();
        let morning_boost = self.morning_light * 0.05 * (-(h - 9.0).powi(2) / 10.0).exp();
        let evening_drag = self.evening_light * 0.06 * (-(h - 22.0).powi(2) / 6.0).exp();
        let consistency_bonus = self.consistency * 0.03;
        let caffeine_effect = if h >= 16.0 && h <= 24.0 - self.caffeine_cutoff {
            0.15
        } else {
            0.0
        };
        base + morning_boost - evening_drag + consistency_bonus + caffeine_effect
    }
}

/// Alertness value at one hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertnessPoint {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Unitless, signed, unbounded
    pub alertness: f64,
}

impl AlertnessPoint {
    /// Axis label, e.g. `9:00`.
    pub fn label(&self) -> String {
        format!("{}:00", self.hour)
    }
}

/// A full day of alertness values, indexed by hour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertnessProfile {
    pub points: Vec<AlertnessPoint>,
}

impl AlertnessProfile {
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.alertness).collect()
    }

    pub fn at(&self, hour: u8) -> Option<f64> {
        self.points.get(usize::from(hour)).map(|p| p.alertness)
    }

    /// Most alert hour. Ties resolve to the later hour.
    pub fn peak(&self) -> Option<&AlertnessPoint> {
        self.points
            .iter()
            .max_by(|a, b| a.alertness.total_cmp(&b.alertness))
    }

    /// Least alert hour. Ties resolve to the earlier hour.
    pub fn trough(&self) -> Option<&AlertnessPoint> {
        self.points
            .iter()
            .min_by(|a, b| a.alertness.total_cmp(&b.alertness))
    }

    /// Lowest and highest values, for chart scaling.
    pub fn range(&self) -> Option<(f64, f64)> {
        Some((self.trough()?.alertness, self.peak()?.alertness))
    }
}

/// Compute the 24-point alertness curve for a set of inputs.
pub fn compute_alertness_curve(inputs: &AlertnessInputs) -> AlertnessProfile {
    let points = (0..HOURS_PER_DAY as u8)
        .map(|hour| AlertnessPoint {
            hour,
            alertness: inputs.alertness_at(hour),
        })
        .collect();
    AlertnessProfile { points }
}
