pub mod alertness;
pub mod compare;
pub mod config;
pub mod debt;
pub mod sleep;

use jetlag_core::error::Result;
use jetlag_core::storage::WindowConfig;
use jetlag_core::{normalize_window, SleepWindow};

/// Build a window from optional flag values, falling back to config.
///
/// With `strict`, malformed times are rejected instead of turning into NaN.
pub(crate) fn resolve_window(
    bed: Option<&str>,
    wake: Option<&str>,
    fallback: &WindowConfig,
    strict: bool,
) -> Result<SleepWindow> {
    let bed = bed.unwrap_or(&fallback.bed);
    let wake = wake.unwrap_or(&fallback.wake);
    if strict {
        Ok(SleepWindow::try_from_strs(bed, wake)?)
    } else {
        Ok(normalize_window(bed, wake))
    }
}
