//! Track zoom factor.

use std::fmt;

use crate::error::TimelineError;

/// Smallest zoom factor, in half steps (0.5x).
const MIN_HALF_STEPS: u8 = 1;
/// Largest zoom factor, in half steps (3.0x).
const MAX_HALF_STEPS: u8 = 6;
/// Default zoom factor, in half steps (1.0x).
const DEFAULT_HALF_STEPS: u8 = 2;

/// Display multiplier for the rendered width of the 24-hour track.
///
/// Ranges over `0.5..=3.0` in steps of `0.5`. Stored as a count of half
/// steps so repeated zooming never accumulates floating-point drift.
/// Clip percentages are fractions of the scaled track and do not change
/// with zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Zoom {
    half_steps: u8,
}

impl Zoom {
    /// Smallest zoom factor.
    pub const MIN: Zoom = Zoom {
        half_steps: MIN_HALF_STEPS,
    };
    /// Largest zoom factor.
    pub const MAX: Zoom = Zoom {
        half_steps: MAX_HALF_STEPS,
    };
    /// Increment of one zoom step.
    pub const STEP: f64 = 0.5;

    /// Creates a zoom from a factor.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::InvalidZoom`] unless `value` is one of
    /// `0.5, 1.0, ..., 3.0`.
    pub fn new(value: f64) -> Result<Self, TimelineError> {
        let half = value / Self::STEP;
        if !half.is_finite() || half.fract() != 0.0 {
            return Err(TimelineError::InvalidZoom { value });
        }
        if half < f64::from(MIN_HALF_STEPS) || half > f64::from(MAX_HALF_STEPS) {
            return Err(TimelineError::InvalidZoom { value });
        }
        Ok(Self {
            half_steps: half as u8,
        })
    }

    /// Current factor.
    pub fn value(self) -> f64 {
        f64::from(self.half_steps) * Self::STEP
    }

    /// Steps up by 0.5, saturating at 3.0. Returns `true` if the factor changed.
    pub fn zoom_in(&mut self) -> bool {
        if self.can_zoom_in() {
            self.half_steps += 1;
            true
        } else {
            false
        }
    }

    /// Steps down by 0.5, saturating at 0.5. Returns `true` if the factor changed.
    pub fn zoom_out(&mut self) -> bool {
        if self.can_zoom_out() {
            self.half_steps -= 1;
            true
        } else {
            false
        }
    }

    /// `false` once the maximum is reached; drives the zoom-in button state.
    pub fn can_zoom_in(self) -> bool {
        self.half_steps < MAX_HALF_STEPS
    }

    /// `false` once the minimum is reached; drives the zoom-out button state.
    pub fn can_zoom_out(self) -> bool {
        self.half_steps > MIN_HALF_STEPS
    }

    /// Rendered track width as a percentage of the viewport.
    pub fn track_width_percent(self) -> f64 {
        100.0 * self.value()
    }

    /// Maps a track percentage to an offset on the scaled track, given the
    /// unzoomed viewport width in any unit (pixels, text columns).
    pub fn to_pixels(self, percent: f64, viewport_px: f64) -> f64 {
        percent / 100.0 * viewport_px * self.value()
    }

    /// Button label, e.g. `"1.5x"`.
    pub fn label(self) -> String {
        format!("{:.1}x", self.value())
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self {
            half_steps: DEFAULT_HALF_STEPS,
        }
    }
}

impl fmt::Display for Zoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl serde::Serialize for Zoom {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}
