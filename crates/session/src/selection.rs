//! The date/recording focus of a viewer session.

use nvr_calendar::Date;
use nvr_store::{Recording, RecordingId, RecordingStore};
use serde::Serialize;
use tracing::debug;

use crate::error::SelectionError;

/// Current focus: the calendar, or one recording of one day.
///
/// In `Viewing`, `recording` is always an entry of the store's list for
/// `date`; every transition re-derives it from the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Selection {
    /// No date chosen; the calendar is shown.
    #[default]
    Browsing,
    /// A date is open and one of its recordings is loaded.
    Viewing { date: Date, recording: Recording },
}

impl Selection {
    /// The open date, if any.
    pub fn date(&self) -> Option<Date> {
        match self {
            Self::Browsing => None,
            Self::Viewing { date, .. } => Some(*date),
        }
    }

    /// The loaded recording, if any.
    pub fn recording(&self) -> Option<&Recording> {
        match self {
            Self::Browsing => None,
            Self::Viewing { recording, .. } => Some(recording),
        }
    }

    /// Returns `true` when no date is open.
    pub fn is_browsing(&self) -> bool {
        matches!(self, Self::Browsing)
    }

    /// Opens `date` with its earliest recording loaded.
    ///
    /// Allowed from either state; picking another day while viewing
    /// switches to that day.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NoRecordings`] if the store lists nothing
    /// for `date`. The selection is unchanged.
    pub fn select_date<S>(&mut self, store: &S, date: Date) -> Result<(), SelectionError>
    where
        S: RecordingStore + ?Sized,
    {
        let first = store
            .recordings_for_date(date)
            .into_iter()
            .next()
            .ok_or(SelectionError::NoRecordings { date })?;
        debug!(%date, recording = %first.id(), "date selected");
        *self = Self::Viewing {
            date,
            recording: first,
        };
        Ok(())
    }

    /// Loads another recording of the open date.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NotViewing`] while browsing, or
    /// [`SelectionError::UnknownRecording`] if `id` is not in the open
    /// date's list. The selection is unchanged.
    pub fn select_recording<S>(
        &mut self,
        store: &S,
        id: &RecordingId,
    ) -> Result<(), SelectionError>
    where
        S: RecordingStore + ?Sized,
    {
        let Self::Viewing { date, recording } = self else {
            return Err(SelectionError::NotViewing { id: id.to_string() });
        };
        let found = store
            .recordings_for_date(*date)
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| SelectionError::UnknownRecording {
                id: id.to_string(),
                date: *date,
            })?;
        debug!(%id, "recording selected");
        *recording = found;
        Ok(())
    }

    /// Returns to the calendar, clearing date and recording.
    pub fn back_to_calendar(&mut self) {
        *self = Self::Browsing;
    }
}
