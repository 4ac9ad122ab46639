//! Sleep window analysis module.
//!
//! This module turns bed/wake wall-clock times into sleep windows on an
//! unwrapped timeline, measures the weekday/weekend mid-sleep shift
//! ("social jetlag") and expands schedules into per-day chart points.

mod analyzer;
mod risk;
mod time_of_day;
mod week;
mod window;

pub use analyzer::{ScheduleComparison, SleepWindowAnalyzer, SocialJetlagReport};
pub use risk::RiskTier;
pub use time_of_day::TimeOfDay;
pub use week::{expand_week, DayPoint, DisplayMode, WEEKDAY_COUNT, WEEKEND_COUNT};
pub use window::{normalize_window, SleepWindow};
