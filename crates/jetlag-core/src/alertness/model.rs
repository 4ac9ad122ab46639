//! One-shot simulation bundling curve, score and explanation.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    compute_alertness_curve, compute_misalignment_score, AlertnessInputs, AlertnessProfile,
    AlignmentTier,
};

/// Everything the sandbox view needs after an input change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertnessReport {
    pub inputs: AlertnessInputs,
    pub curve: AlertnessProfile,
    pub misalignment_score: f64,
    pub tier: AlignmentTier,
    pub explanation: String,
}

/// Stateless entry point for the alertness model.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertnessModel;

impl AlertnessModel {
    pub fn new() -> Self {
        Self
    }

    pub fn simulate(&self, inputs: &AlertnessInputs) -> AlertnessReport {
        let curve = compute_alertness_curve(inputs);
        let misalignment_score = compute_misalignment_score(inputs);
        let tier = AlignmentTier::classify(misalignment_score);

        if misalignment_score.is_finite() {
            debug!(score = misalignment_score, tier = %tier, "simulated alertness curve");
        } else {
            warn!(?inputs, "misalignment score is not a number; check knob values");
        }

        AlertnessReport {
            inputs: *inputs,
            curve,
            misalignment_score,
            tier,
            explanation: tier.explanation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_default_inputs() {
        let report = AlertnessModel::new().simulate(&AlertnessInputs::default());

        // 5*0.2 - 5*0.15 - 5*0.1 + 0 = -0.25
        assert!((report.misalignment_score + 0.25).abs() < 1e-12);
        assert_eq!(report.tier, AlignmentTier::WellAligned);
        assert_eq!(report.curve.points.len(), 24);
        assert_eq!(report.explanation, AlignmentTier::WellAligned.explanation());
    }

    #[test]
    fn simulate_is_deterministic() {
        let model = AlertnessModel::new();
        let inputs = AlertnessInputs::new(3.0, 7.5, 2.0, 6.0);
        let a = model.simulate(&inputs);
        let b = model.simulate(&inputs);

        assert_eq!(a.misalignment_score.to_bits(), b.misalignment_score.to_bits());
        for (x, y) in a.curve.points.iter().zip(&b.curve.points) {
            assert_eq!(x.alertness.to_bits(), y.alertness.to_bits());
        }
    }
}
