//! Messages into and out of a [`Session`](crate::Session).

use nvr_calendar::{Date, YearMonth};
use nvr_store::RecordingId;
use nvr_timeline::Zoom;
use serde::{Deserialize, Serialize};

use crate::transport::Transport;

/// A user action.
///
/// Serialized as JSON objects tagged by `command`, e.g.
/// `{"command":"select_date","date":"2026-10-18"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case", deny_unknown_fields)]
pub enum Command {
    SelectDate { date: Date },
    SelectRecording { id: RecordingId },
    BackToCalendar,
    PrevMonth,
    NextMonth,
    ZoomIn,
    ZoomOut,
    TogglePlay,
    ToggleMute,
    SetVolume { volume: f64 },
    SetSpeed { speed: f64 },
    Seek { position: f64 },
}

/// A state change reported back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// A date was opened with its earliest recording loaded.
    DateSelected { date: Date, recording: RecordingId },
    /// Another recording of the open date was loaded.
    RecordingSelected { id: RecordingId },
    /// The calendar is shown again; nothing is selected.
    ReturnedToCalendar,
    /// The displayed calendar month changed.
    MonthChanged { month: YearMonth },
    /// The timeline zoom changed.
    ZoomChanged { zoom: Zoom },
    /// Any player control changed; carries the full transport state.
    PlaybackChanged { transport: Transport },
    /// The command was not allowed; nothing changed.
    Rejected { reason: String },
}
