//! Error types for the nvr-session crate.

use nvr_calendar::Date;
use nvr_timeline::TimelineError;

/// A selection change that the current state does not allow.
///
/// The selection is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    /// Returned when a date with an empty recording list is picked.
    #[error("no recordings on {date}")]
    NoRecordings {
        /// The rejected date.
        date: Date,
    },

    /// Returned when a recording is picked while no date is open.
    #[error("cannot select recording {id}: no date selected")]
    NotViewing {
        /// The requested recording.
        id: String,
    },

    /// Returned when a recording is not part of the open date's list.
    #[error("recording {id} is not listed on {date}")]
    UnknownRecording {
        /// The requested recording.
        id: String,
        /// The open date.
        date: Date,
    },
}

/// A playback control change that the transport does not allow.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// Returned when a speed outside the offered set is requested.
    #[error("unsupported playback speed: {speed}x (expected one of 0.5, 1, 2)")]
    UnsupportedSpeed {
        /// The rejected speed.
        speed: f64,
    },

    /// Returned when a volume is not a finite number.
    #[error("invalid volume: {value}")]
    InvalidVolume {
        /// The rejected value.
        value: f64,
    },

    /// Returned when a seek target is not a finite number.
    #[error("invalid seek position: {value}")]
    InvalidPosition {
        /// The rejected value.
        value: f64,
    },

    /// Returned when play or seek is requested with no clip loaded.
    #[error("no recording loaded")]
    NothingLoaded,
}

/// Error type for session construction and read-only views.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// Selection change rejected.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Playback change rejected.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Invalid layout configuration or clip geometry.
    #[error("timeline: {0}")]
    Timeline(#[from] TimelineError),
}
