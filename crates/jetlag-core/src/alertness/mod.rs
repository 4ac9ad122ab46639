//! Alertness curve module.
//!
//! This module provides the illustrative circadian alertness model: a fixed
//! closed-form curve over the 24 hours of a day, and a directional score
//! estimating how far light, consistency and caffeine habits delay the
//! internal clock.

mod curve;
mod model;
mod score;

pub use curve::{
    compute_alertness_curve, AlertnessInputs, AlertnessPoint, AlertnessProfile, HOURS_PER_DAY,
};
pub use model::{AlertnessModel, AlertnessReport};
pub use score::{compute_misalignment_score, AlignmentTier};
