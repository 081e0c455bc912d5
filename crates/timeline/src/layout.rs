//! Per-clip placement on the 24-hour track.

use tracing::debug;

use crate::clock::{ClockTime, SECONDS_PER_DAY};
use crate::error::TimelineError;
use crate::position::width;

/// Default floor for the rendered width of a clip, in track percent.
pub const DEFAULT_MIN_CLIP_WIDTH: f64 = 0.5;

/// Rendering settings for clip layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    min_clip_width: f64,
}

impl LayoutConfig {
    /// Creates a layout configuration with the given minimum clip width.
    pub fn new(min_clip_width: f64) -> Self {
        Self { min_clip_width }
    }

    /// Minimum rendered width of a clip, in track percent.
    pub fn min_clip_width(&self) -> f64 {
        self.min_clip_width
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the minimum width is non-finite or outside 0..=100.
    pub fn validate(&self) -> Result<(), TimelineError> {
        if !self.min_clip_width.is_finite() || !(0.0..=100.0).contains(&self.min_clip_width) {
            return Err(TimelineError::InvalidMinWidth {
                value: self.min_clip_width,
            });
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_CLIP_WIDTH)
    }
}

/// Geometry and labels for one clip on the track.
///
/// `left` and `width` are the exact values from the time-position mapping.
/// `rendered_left` and `rendered_width` are what a renderer should draw: the
/// part of the clip before midnight, floored to the minimum clickable width,
/// and kept inside the track.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ClipLayout {
    pub start: ClockTime,
    pub end: ClockTime,
    pub left: f64,
    pub width: f64,
    pub rendered_left: f64,
    pub rendered_width: f64,
    /// The clip runs past midnight; its end time is earlier than its start.
    pub wraps_midnight: bool,
    /// Whole minutes, e.g. `"2m"`.
    pub duration_label: String,
    /// Hover text, e.g. `"10:15 - 10:17"`.
    pub tooltip: String,
}

impl ClipLayout {
    /// Replaces the computed end time with a recorded one, keeping the
    /// tooltip in step. Geometry still follows the duration.
    pub fn with_end(mut self, end: ClockTime) -> Self {
        self.end = end;
        self.tooltip = format!("{} - {end}", self.start);
        self
    }
}

/// Lays out a clip that starts at `start` and lasts `duration_secs`.
///
/// A clip that wraps past midnight is drawn from its start to the end of
/// the track and flagged with `wraps_midnight`; the portion after midnight
/// belongs to the next day's track and is not drawn here.
///
/// # Errors
///
/// Returns [`TimelineError::InvalidDuration`] if `duration_secs` is zero, or
/// [`TimelineError::InvalidMinWidth`] if the configuration is invalid.
pub fn layout_clip(
    start: ClockTime,
    duration_secs: u32,
    config: &LayoutConfig,
) -> Result<ClipLayout, TimelineError> {
    config.validate()?;
    let width = width(duration_secs)?;
    let left = start.position();
    let end = start.add_seconds(duration_secs);

    let start_secs = u32::from(start.minutes_of_day()) * 60;
    let wraps_midnight = start_secs.saturating_add(duration_secs) > SECONDS_PER_DAY;
    if wraps_midnight {
        debug!(%start, %end, duration_secs, "clip wraps past midnight, clipping at track end");
    }

    let room = 100.0 - left;
    let rendered_width = width.min(room).max(config.min_clip_width);
    let rendered_left = left.min(100.0 - rendered_width);

    Ok(ClipLayout {
        start,
        end,
        left,
        width,
        rendered_left,
        rendered_width,
        wraps_midnight,
        duration_label: format!("{}m", duration_secs / 60),
        tooltip: format!("{start} - {end}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse(s).unwrap()
    }

    #[test]
    fn ordinary_clip() {
        let layout = layout_clip(t("12:00"), 2 * 3600, &LayoutConfig::default()).unwrap();
        assert_abs_diff_eq!(layout.left, 50.0);
        assert_abs_diff_eq!(layout.width, 100.0 / 12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(layout.rendered_left, 50.0);
        assert_abs_diff_eq!(layout.rendered_width, layout.width);
        assert!(!layout.wraps_midnight);
        assert_eq!(layout.end.to_string(), "14:00");
        assert_eq!(layout.duration_label, "120m");
        assert_eq!(layout.tooltip, "12:00 - 14:00");
    }

    #[test]
    fn short_clip_floored() {
        let layout = layout_clip(t("08:30"), 45, &LayoutConfig::default()).unwrap();
        assert!(layout.width < DEFAULT_MIN_CLIP_WIDTH);
        assert_abs_diff_eq!(layout.rendered_width, DEFAULT_MIN_CLIP_WIDTH);
        assert_eq!(layout.duration_label, "0m");
    }

    #[test]
    fn wrapped_clip_clipped_at_track_end() {
        let layout = layout_clip(t("22:00"), 4 * 3600, &LayoutConfig::default()).unwrap();
        assert!(layout.wraps_midnight);
        assert!(layout.end < layout.start);
        assert_eq!(layout.end.to_string(), "02:00");
        assert_abs_diff_eq!(layout.rendered_left + layout.rendered_width, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn floored_clip_near_midnight_stays_on_track() {
        let layout = layout_clip(t("23:59"), 30, &LayoutConfig::default()).unwrap();
        assert!(!layout.wraps_midnight);
        assert_abs_diff_eq!(layout.rendered_width, DEFAULT_MIN_CLIP_WIDTH);
        assert!(layout.rendered_left + layout.rendered_width <= 100.0 + 1e-9);
        assert!(layout.rendered_left < layout.left);
    }

    #[test]
    fn clip_ending_exactly_at_midnight_does_not_wrap() {
        let layout = layout_clip(t("23:00"), 3600, &LayoutConfig::default()).unwrap();
        assert!(!layout.wraps_midnight);
        assert_eq!(layout.end.to_string(), "00:00");
    }

    #[test]
    fn recorded_end_replaces_computed_end() {
        let layout = layout_clip(t("10:00"), 60, &LayoutConfig::default())
            .unwrap()
            .with_end(t("10:05"));
        assert_eq!(layout.end.to_string(), "10:05");
        assert_eq!(layout.tooltip, "10:00 - 10:05");
        assert_abs_diff_eq!(layout.width, width(60).unwrap());
    }

    #[test]
    fn zero_duration_rejected() {
        assert_eq!(
            layout_clip(t("01:00"), 0, &LayoutConfig::default()).unwrap_err(),
            TimelineError::InvalidDuration { secs: 0 }
        );
    }

    #[test]
    fn invalid_min_width_rejected() {
        for bad in [-0.1, 100.5, f64::NAN] {
            assert!(matches!(
                layout_clip(t("01:00"), 60, &LayoutConfig::new(bad)),
                Err(TimelineError::InvalidMinWidth { .. })
            ));
        }
    }
}
