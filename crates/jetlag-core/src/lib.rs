//! # Jetlag Core Library
//!
//! This library provides the computational core of the Jetlag social-jetlag
//! calculator. Every front end (the standalone CLI, or any GUI layered on top)
//! collects raw input values, calls into this crate, and renders whatever
//! numbers and labels come back.
//!
//! ## Architecture
//!
//! - **Sleep**: "HH:MM" parsing, midnight-crossing sleep windows, mid-sleep
//!   points and the weekday/weekend misalignment metric with its risk tiers
//! - **Alertness**: a fixed heuristic 24-hour alertness curve driven by four
//!   knobs, plus a directional misalignment score
//! - **Debt**: weekly sleep debt from a daily loss figure
//! - **Storage**: TOML configuration supplying default inputs
//!
//! All computations are pure functions of their arguments. Malformed input
//! is not rejected by the numeric core; it propagates as NaN. Strict parsing
//! entry points are available for callers that prefer an explicit error.
//!
//! ## Key Components
//!
//! - [`SleepWindowAnalyzer`]: social jetlag analysis of two sleep windows
//! - [`AlertnessModel`]: alertness curve and alignment classification
//! - [`classify_debt`]: sleep debt tiers
//! - [`Config`]: default input values

pub mod alertness;
pub mod debt;
pub mod error;
pub mod sleep;
pub mod storage;

pub use alertness::{
    compute_alertness_curve, compute_misalignment_score, AlertnessInputs, AlertnessModel,
    AlertnessPoint, AlertnessProfile, AlertnessReport, AlignmentTier,
};
pub use debt::{classify_debt, DebtTier, SleepDebt, WORKDAYS_PER_WEEK};
pub use error::{ConfigError, CoreError, ValidationError};
pub use sleep::{
    expand_week, normalize_window, DayPoint, DisplayMode, RiskTier, ScheduleComparison,
    SleepWindow, SleepWindowAnalyzer, SocialJetlagReport, TimeOfDay,
};
pub use storage::Config;
