//! Sleep windows on an unwrapped 24+ hour timeline.

use serde::{Deserialize, Serialize};

use super::TimeOfDay;
use crate::error::ValidationError;

/// A single night's sleep interval.
///
/// After normalization `wake_hour > bed_hour` and `wake_hour < bed_hour + 24`
/// for any finite input: a wake time at or before the bed time is taken to
/// fall on the following day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepWindow {
    /// Bed time in hours since midnight (0..24)
    pub bed_hour: f64,
    /// Wake time in hours, may exceed 24 when sleep crosses midnight
    pub wake_hour: f64,
}

impl SleepWindow {
    /// Build a window from parsed times, pushing the wake time past
    /// midnight when it does not come after the bed time.
    pub fn normalize(bed: TimeOfDay, wake: TimeOfDay) -> Self {
        let bed_hour = bed.hours();
        let mut wake_hour = wake.hours();
        if wake_hour <= bed_hour {
            wake_hour += 24.0;
        }
        Self {
            bed_hour,
            wake_hour,
        }
    }

    /// Strict variant of [`normalize_window`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTime`] if either string is not a
    /// valid "HH:MM" time.
    pub fn try_from_strs(bed: &str, wake: &str) -> Result<Self, ValidationError> {
        Ok(Self::normalize(TimeOfDay::parse(bed)?, TimeOfDay::parse(wake)?))
    }

    /// Clock-time midpoint of the interval.
    ///
    /// Not wrapped back into 0..24: a value of 25.5 means 01:30 the next
    /// day, and misalignment is measured on these unwrapped values.
    pub fn mid_sleep(&self) -> f64 {
        (self.bed_hour + self.wake_hour) / 2.0
    }

    pub fn duration_hours(&self) -> f64 {
        self.wake_hour - self.bed_hour
    }

    /// Bed time folded into 0..24 for display.
    pub fn bed_clock(&self) -> f64 {
        self.bed_hour % 24.0
    }

    /// Wake time folded into 0..24 for display.
    pub fn wake_clock(&self) -> f64 {
        self.wake_hour % 24.0
    }

    pub fn is_valid(&self) -> bool {
        self.bed_hour.is_finite() && self.wake_hour.is_finite()
    }
}

/// Parse two "HH:MM" strings into a normalized [`SleepWindow`].
///
/// Malformed strings are not rejected; the affected fields become NaN and
/// propagate through every downstream computation.
pub fn normalize_window(bed: &str, wake: &str) -> SleepWindow {
    SleepWindow::normalize(TimeOfDay::parse_lenient(bed), TimeOfDay::parse_lenient(wake))
}
