//! Qualitative risk tiers for the social jetlag metric.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk level derived from the weekday/weekend mid-sleep difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Lower bound (inclusive) of the moderate tier, in hours.
    pub const MODERATE_FROM_HOURS: f64 = 1.0;
    /// Lower bound (inclusive) of the high tier, in hours.
    pub const HIGH_FROM_HOURS: f64 = 2.0;

    /// Classify a misalignment metric in hours.
    ///
    /// `< 1` is low, `1..2` is moderate, `>= 2` is high. A NaN metric fails
    /// both comparisons and lands in the high tier.
    pub fn classify(metric: f64) -> Self {
        if metric < Self::MODERATE_FROM_HOURS {
            RiskTier::Low
        } else if metric < Self::HIGH_FROM_HOURS {
            RiskTier::Moderate
        } else {
            RiskTier::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            RiskTier::Low => {
                "Your social jetlag is relatively small. Keeping a consistent schedule will help maintain this."
            }
            RiskTier::Moderate => {
                "You have a noticeable shift between weekdays and weekends. Gradual adjustments could reduce fatigue."
            }
            RiskTier::High => {
                "Your social jetlag is large. This level of misalignment is often linked to worse mood and performance."
            }
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
