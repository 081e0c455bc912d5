//! # nvr-timeline
//!
//! Maps day-relative clock times and clip durations onto a horizontal
//! 24-hour track.
//!
//! A time of day becomes a left edge in percent (`minutes / 1440 * 100`),
//! a duration becomes a width in percent (`secs / 60 / 1440 * 100`), and a
//! [`Zoom`] factor scales the rendered width of the whole track without
//! touching per-clip percentages.
//!
//! # Quick start
//!
//! ```
//! use nvr_timeline::{ClockTime, LayoutConfig, Zoom, layout_clip, position, width};
//!
//! assert_eq!(position("12:00").unwrap(), 50.0);
//! assert_eq!(width(24 * 3600).unwrap(), 100.0);
//!
//! let start = ClockTime::parse("23:50").unwrap();
//! let clip = layout_clip(start, 120, &LayoutConfig::default()).unwrap();
//! assert_eq!(clip.end.to_string(), "23:52");
//!
//! let mut zoom = Zoom::default();
//! zoom.zoom_in();
//! assert_eq!(zoom.value(), 1.5);
//! ```
//!
//! # Architecture
//!
//! ```text
//! "HH:MM" ──ClockTime::parse()──▶ ClockTime ──.position()──▶ left %
//! duration_secs ──────────width()──────────────────────────▶ width %
//! (ClockTime, secs) ──layout_clip()──▶ ClipLayout (floored, clipped at midnight)
//! Zoom ──.to_pixels()──▶ offsets on the scaled track
//! ```

pub mod clock;
pub mod error;
pub mod layout;
pub mod position;
pub mod zoom;

pub use clock::{ClockTime, MINUTES_PER_DAY, SECONDS_PER_DAY};
pub use error::TimelineError;
pub use layout::{ClipLayout, DEFAULT_MIN_CLIP_WIDTH, LayoutConfig, layout_clip};
pub use position::{HourMarker, grid_lines, hour_markers, position, width};
pub use zoom::Zoom;
