//! Error types for the nvr-store crate.

use nvr_calendar::{CalendarError, Date};
use nvr_timeline::TimelineError;

/// Error type for all fallible operations in the nvr-store crate.
///
/// Every variant is a validation failure detected where recordings enter
/// the store; nothing downstream of ingestion can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// Returned when a recording's duration is zero or negative.
    #[error("recording {id}: duration must be > 0 seconds, got {secs}")]
    InvalidDuration {
        /// Identifier of the offending recording.
        id: String,
        /// The rejected duration.
        secs: i64,
    },

    /// Returned when a recording's start or end time is malformed.
    #[error("recording {id}: {source}")]
    InvalidTime {
        /// Identifier of the offending recording.
        id: String,
        /// Underlying parse failure.
        #[source]
        source: TimelineError,
    },

    /// Returned when a recording's date text is malformed.
    #[error("recording {id}: {source}")]
    InvalidDate {
        /// Identifier of the offending recording.
        id: String,
        /// Underlying parse failure.
        #[source]
        source: CalendarError,
    },

    /// Returned when a recording is grouped under a day it does not belong to.
    #[error("recording {id} is dated {found} but grouped under {expected}")]
    DateMismatch {
        /// Identifier of the offending recording.
        id: String,
        /// The group's date.
        expected: Date,
        /// The recording's own date.
        found: Date,
    },

    /// Returned when two day groups share the same date.
    #[error("duplicate day group for {date}")]
    DuplicateDate {
        /// The repeated date.
        date: Date,
    },

    /// Returned when two recordings share the same identifier.
    #[error("duplicate recording id: {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },

    /// Returned when a recording identifier is empty.
    #[error("recording id must not be empty")]
    EmptyId,

    /// Returned when a generator day offset leaves the supported date range.
    #[error("generator day offset: {0}")]
    DateRange(#[from] CalendarError),

    /// Returned when generator settings are inconsistent.
    #[error("invalid generator config: {reason}")]
    InvalidConfig {
        /// What is wrong with the settings.
        reason: String,
    },

    /// Returned when recordings cannot be encoded as JSON.
    #[error("failed to encode recordings: {reason}")]
    Encode {
        /// Encoder message.
        reason: String,
    },

    /// Returned when recording JSON cannot be decoded.
    #[error("failed to decode recordings: {reason}")]
    Decode {
        /// Decoder message.
        reason: String,
    },
}
