//! Error types for the nvr-timeline crate.

/// Error type for all fallible operations in the nvr-timeline crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimelineError {
    /// Returned when a time string is not `HH:MM` with hours 0..=23 and
    /// minutes 0..=59.
    #[error("invalid time of day: {input:?} (expected HH:MM, 00:00..=23:59)")]
    InvalidTime {
        /// The text that failed validation.
        input: String,
    },

    /// Returned when a clip duration is zero.
    #[error("clip duration must be > 0 seconds, got {secs}")]
    InvalidDuration {
        /// The rejected duration in seconds.
        secs: u32,
    },

    /// Returned when a zoom factor is outside 0.5..=3.0 or not a multiple of 0.5.
    #[error("invalid zoom factor: {value} (must be 0.5..=3.0 in steps of 0.5)")]
    InvalidZoom {
        /// The rejected zoom factor.
        value: f64,
    },

    /// Returned when the minimum rendered clip width is not a percentage in 0..=100.
    #[error("minimum clip width must be within 0..=100 percent, got {value}")]
    InvalidMinWidth {
        /// The rejected width.
        value: f64,
    },
}
