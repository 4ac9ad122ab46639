//! Directional misalignment score and its alignment tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::AlertnessInputs;

/// Synthetic phase-delay estimate.
///
/// Evening light pushes the score up, morning light and consistency pull it
/// down, and a caffeine cutoff shorter than 8 hours before midnight adds to
/// it.
pub fn compute_misalignment_score(inputs: &AlertnessInputs) -> f64 {
    inputs.evening_light * 0.2 - inputs.morning_light * 0.15 - inputs.consistency * 0.1
        + (8.0 - inputs.caffeine_cutoff) * 0.05
}

/// Qualitative reading of the misalignment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentTier {
    DelayedHigh,
    DelayedMild,
    Neutral,
    WellAligned,
}

impl AlignmentTier {
    /// Classify a score. Upper comparisons are strict, so 0.8, 0.2 and -0.2
    /// fall into the lower-magnitude tier. NaN is treated as well aligned.
    pub fn classify(score: f64) -> Self {
        if score > 0.8 {
            AlignmentTier::DelayedHigh
        } else if score > 0.2 {
            AlignmentTier::DelayedMild
        } else if score > -0.2 {
            AlignmentTier::Neutral
        } else {
            AlignmentTier::WellAligned
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AlignmentTier::DelayedHigh => "Delayed (high)",
            AlignmentTier::DelayedMild => "Delayed (mild)",
            AlignmentTier::Neutral => "Neutral",
            AlignmentTier::WellAligned => "Well aligned",
        }
    }

    fn detail(self) -> &'static str {
        match self {
            AlignmentTier::DelayedHigh => {
                "a delayed internal clock and higher risk of social jetlag, especially if you need early wake times."
            }
            AlignmentTier::DelayedMild => {
                "some delay in your internal clock. Earlier light and more consistent bedtimes could improve alignment."
            }
            AlignmentTier::Neutral => {
                "a fairly neutral alignment. Small tweaks in light and caffeine timing can still fine-tune your rhythm."
            }
            AlignmentTier::WellAligned => {
                "a relatively well-aligned clock, with strong morning cues and consistent sleep supporting stable alertness."
            }
        }
    }

    /// Full sentence shown alongside the curve.
    pub fn explanation(self) -> String {
        format!("Your settings suggest {}", self.detail())
    }
}

impl fmt::Display for AlignmentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
