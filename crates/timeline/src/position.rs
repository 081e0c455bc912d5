//! Clock time and duration to track percentage.

use crate::clock::{ClockTime, MINUTES_PER_DAY};
use crate::error::TimelineError;

/// Left edge of `time` on the 24-hour track, as a percentage.
///
/// `position("00:00") == 0.0`, `position("12:00") == 50.0`.
///
/// # Errors
///
/// Returns [`TimelineError::InvalidTime`] if `time` is not a valid `HH:MM`.
pub fn position(time: &str) -> Result<f64, TimelineError> {
    Ok(ClockTime::parse(time)?.position())
}

/// Width of a clip lasting `duration_secs` on the 24-hour track, as a
/// percentage.
///
/// The value is not floored to any minimum visible width; a one-minute
/// clip is about 0.07 percent wide. Renderers apply their own floor (see
/// [`crate::layout_clip`]).
///
/// # Errors
///
/// Returns [`TimelineError::InvalidDuration`] if `duration_secs` is zero.
pub fn width(duration_secs: u32) -> Result<f64, TimelineError> {
    if duration_secs == 0 {
        return Err(TimelineError::InvalidDuration {
            secs: duration_secs,
        });
    }
    Ok(f64::from(duration_secs) / 60.0 / f64::from(MINUTES_PER_DAY) * 100.0)
}

/// Position of one hour mark on the track.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HourMarker {
    /// Hour of day, 0..=24.
    pub hour: u8,
    /// Label such as `"7:00"`.
    pub label: String,
    /// Left edge as a percentage of the track.
    pub percent: f64,
}

/// The 25 hour labels `0:00` through `24:00`, spread evenly over the track.
pub fn hour_markers() -> Vec<HourMarker> {
    (0..=24u8)
        .map(|hour| HourMarker {
            hour,
            label: format!("{hour}:00"),
            percent: f64::from(hour) / 24.0 * 100.0,
        })
        .collect()
}

/// Left edges of the 24 vertical hour grid lines.
pub fn grid_lines() -> Vec<f64> {
    (0..24u8).map(|i| f64::from(i) / 24.0 * 100.0).collect()
}
