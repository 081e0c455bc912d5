//! The command-driven viewer session.

use nvr_calendar::{MonthGrid, YearMonth};
use nvr_store::RecordingStore;
use nvr_timeline::{LayoutConfig, Zoom};
use tracing::{debug, warn};

use crate::command::{Command, Event};
use crate::error::SessionError;
use crate::selection::Selection;
use crate::transport::Transport;
use crate::view::TimelineView;

/// Owns all mutable viewer state on top of a read-only store.
///
/// State changes only through [`Session::apply`]; every other method is a
/// read-only view for the presentation layer.
#[derive(Debug)]
pub struct Session<S> {
    store: S,
    month: YearMonth,
    selection: Selection,
    zoom: Zoom,
    transport: Transport,
    layout: LayoutConfig,
}

impl<S: RecordingStore> Session<S> {
    /// Starts browsing `month` with default zoom and layout.
    pub fn new(store: S, month: YearMonth) -> Self {
        Self {
            store,
            month,
            selection: Selection::default(),
            zoom: Zoom::default(),
            transport: Transport::default(),
            layout: LayoutConfig::default(),
        }
    }

    /// Replaces the clip layout settings.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Timeline`] if `layout` is invalid.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Result<Self, SessionError> {
        layout.validate()?;
        self.layout = layout;
        Ok(self)
    }

    /// Sets the initial timeline zoom.
    pub fn with_zoom(mut self, zoom: Zoom) -> Self {
        self.zoom = zoom;
        self
    }

    /// Returns the recording store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The month the calendar displays.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// Returns the current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the timeline zoom.
    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    /// Returns the player state.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// The displayed month with recording and selection markers.
    pub fn calendar_grid(&self) -> MonthGrid {
        MonthGrid::build(
            self.month,
            &self.store.dates_with_recordings(),
            self.selection.date(),
        )
    }

    /// The open date's clips laid out on the track; `None` while browsing.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Timeline`] if a clip cannot be laid out.
    pub fn timeline(&self) -> Result<Option<TimelineView>, SessionError> {
        let Selection::Viewing { date, recording } = &self.selection else {
            return Ok(None);
        };
        let recordings = self.store.recordings_for_date(*date);
        let view = TimelineView::build(
            *date,
            &recordings,
            self.zoom,
            &self.layout,
            Some(recording.id()),
        )?;
        Ok(Some(view))
    }

    /// Applies one user action and reports what changed.
    ///
    /// Disallowed actions leave the session untouched and yield a single
    /// [`Event::Rejected`].
    pub fn apply(&mut self, command: Command) -> Vec<Event> {
        debug!(?command, "applying command");
        match command {
            Command::SelectDate { date } => {
                if let Err(e) = self.selection.select_date(&self.store, date) {
                    return reject(e);
                }
                let mut events = Vec::with_capacity(3);
                if !self.month.contains(date) {
                    self.month = date.year_month();
                    events.push(Event::MonthChanged { month: self.month });
                }
                if let Some(recording) = self.selection.recording() {
                    self.transport.load(recording.duration());
                    events.push(Event::DateSelected {
                        date,
                        recording: recording.id().clone(),
                    });
                }
                events.push(self.playback_changed());
                events
            }
            Command::SelectRecording { id } => {
                if let Err(e) = self.selection.select_recording(&self.store, &id) {
                    return reject(e);
                }
                if let Some(recording) = self.selection.recording() {
                    self.transport.load(recording.duration());
                }
                vec![Event::RecordingSelected { id }, self.playback_changed()]
            }
            Command::BackToCalendar => {
                self.selection.back_to_calendar();
                self.transport.unload();
                vec![Event::ReturnedToCalendar]
            }
            Command::PrevMonth => {
                self.month = self.month.prev();
                vec![Event::MonthChanged { month: self.month }]
            }
            Command::NextMonth => {
                self.month = self.month.next();
                vec![Event::MonthChanged { month: self.month }]
            }
            Command::ZoomIn => {
                if !self.zoom.zoom_in() {
                    return reject(format_args!("already at maximum zoom {}", self.zoom));
                }
                vec![Event::ZoomChanged { zoom: self.zoom }]
            }
            Command::ZoomOut => {
                if !self.zoom.zoom_out() {
                    return reject(format_args!("already at minimum zoom {}", self.zoom));
                }
                vec![Event::ZoomChanged { zoom: self.zoom }]
            }
            Command::TogglePlay => match self.transport.toggle_play() {
                Ok(_) => vec![self.playback_changed()],
                Err(e) => reject(e),
            },
            Command::ToggleMute => {
                self.transport.toggle_mute();
                vec![self.playback_changed()]
            }
            Command::SetVolume { volume } => match self.transport.set_volume(volume) {
                Ok(()) => vec![self.playback_changed()],
                Err(e) => reject(e),
            },
            Command::SetSpeed { speed } => match self.transport.set_speed(speed) {
                Ok(()) => vec![self.playback_changed()],
                Err(e) => reject(e),
            },
            Command::Seek { position } => match self.transport.seek(position) {
                Ok(()) => vec![self.playback_changed()],
                Err(e) => reject(e),
            },
        }
    }

    /// Applies `commands` in order, concatenating their events.
    pub fn run(&mut self, commands: impl IntoIterator<Item = Command>) -> Vec<Event> {
        commands.into_iter().flat_map(|c| self.apply(c)).collect()
    }

    fn playback_changed(&self) -> Event {
        Event::PlaybackChanged {
            transport: self.transport.clone(),
        }
    }
}

fn reject(reason: impl std::fmt::Display) -> Vec<Event> {
    let reason = reason.to_string();
    warn!(%reason, "command rejected");
    vec![Event::Rejected { reason }]
}
