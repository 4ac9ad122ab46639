//! Weekly sleep debt from a daily sleep loss.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Workdays over which daily loss accumulates.
pub const WORKDAYS_PER_WEEK: f64 = 5.0;

/// Severity of accumulated weekly debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtTier {
    NoDebt,
    Mild,
    Substantial,
    Severe,
}

impl DebtTier {
    /// Tier for a weekly debt in hours.
    ///
    /// Zero is matched exactly, with no tolerance. `(0, 5]` is mild,
    /// `(5, 10]` substantial, anything above (or NaN) severe. Negative debt
    /// is reported as mild.
    pub fn classify(weekly_debt_hours: f64) -> Self {
        if weekly_debt_hours == 0.0 {
            DebtTier::NoDebt
        } else if weekly_debt_hours <= 5.0 {
            DebtTier::Mild
        } else if weekly_debt_hours <= 10.0 {
            DebtTier::Substantial
        } else {
            DebtTier::Severe
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            DebtTier::NoDebt => {
                "No weekday sleep loss. Your schedule is not building measurable sleep debt across the workweek."
            }
            DebtTier::Mild => {
                "This level of weekly sleep debt can leave you feeling a bit more tired and reliant on catch-up sleep."
            }
            DebtTier::Substantial => {
                "You are accumulating substantial sleep debt. Many people at this level report strong weekend rebound sleep."
            }
            DebtTier::Severe => {
                "Very high weekly sleep debt. Over time, this pattern is associated with worse mood, performance, and health."
            }
        }
    }
}

impl fmt::Display for DebtTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DebtTier::NoDebt => "no debt",
            DebtTier::Mild => "mild",
            DebtTier::Substantial => "substantial",
            DebtTier::Severe => "severe",
        };
        f.write_str(s)
    }
}

/// Classified weekly sleep debt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepDebt {
    pub daily_loss_hours: f64,
    pub weekly_debt_hours: f64,
    pub tier: DebtTier,
    pub message: String,
}

/// Multiply a daily loss over the workweek and classify it.
pub fn classify_debt(daily_loss_hours: f64) -> SleepDebt {
    let weekly_debt_hours = daily_loss_hours * WORKDAYS_PER_WEEK;
    let tier = DebtTier::classify(weekly_debt_hours);
    debug!(weekly_debt_hours, tier = %tier, "classified sleep debt");
    SleepDebt {
        daily_loss_hours,
        weekly_debt_hours,
        tier,
        message: tier.message().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_loss_is_no_debt() {
        let debt = classify_debt(0.0);
        assert_eq!(debt.weekly_debt_hours, 0.0);
        assert_eq!(debt.tier, DebtTier::NoDebt);
    }

    #[test]
    fn one_hour_a_day_is_mild_at_boundary() {
        let debt = classify_debt(1.0);
        assert_eq!(debt.weekly_debt_hours, 5.0);
        assert_eq!(debt.tier, DebtTier::Mild);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(classify_debt(0.5).tier, DebtTier::Mild);
        assert_eq!(classify_debt(1.5).tier, DebtTier::Substantial);
        assert_eq!(classify_debt(2.0).tier, DebtTier::Substantial);
        assert_eq!(classify_debt(2.5).tier, DebtTier::Severe);
    }

    #[test]
    fn tiny_loss_is_not_zero() {
        assert_eq!(classify_debt(1e-9).tier, DebtTier::Mild);
    }

    #[test]
    fn nan_loss_is_severe() {
        let debt = classify_debt(f64::NAN);
        assert!(debt.weekly_debt_hours.is_nan());
        assert_eq!(debt.tier, DebtTier::Severe);
    }

    #[test]
    fn message_matches_tier() {
        let debt = classify_debt(3.0);
        assert_eq!(debt.message, DebtTier::Severe.message());
    }
}
