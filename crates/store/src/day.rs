//! Recordings grouped under one calendar day.

use nvr_calendar::Date;
use serde::Serialize;

use crate::error::StoreError;
use crate::recording::Recording;

/// All recordings of one day, sorted by start time.
///
/// Every contained recording carries the group's date. Recordings with equal
/// start times keep their insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecordings {
    date: Date,
    recordings: Vec<Recording>,
}

impl DayRecordings {
    /// Groups `recordings` under `date`, sorting them by start time.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DateMismatch`] for the first recording whose
    /// own date differs from `date`.
    pub fn new(date: Date, mut recordings: Vec<Recording>) -> Result<Self, StoreError> {
        if let Some(stray) = recordings.iter().find(|r| r.date() != date) {
            return Err(StoreError::DateMismatch {
                id: stray.id().to_string(),
                expected: date,
                found: stray.date(),
            });
        }
        recordings.sort_by_key(Recording::start_time);
        Ok(Self { date, recordings })
    }

    /// Returns the day.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Recordings in start-time order.
    pub fn recordings(&self) -> &[Recording] {
        &self.recordings
    }

    /// The earliest recording of the day.
    pub fn first(&self) -> Option<&Recording> {
        self.recordings.first()
    }

    /// Returns the number of clips.
    pub fn len(&self) -> usize {
        self.recordings.len()
    }

    /// Returns `true` if the day has no clips.
    pub fn is_empty(&self) -> bool {
        self.recordings.is_empty()
    }

    /// Total recorded seconds across the day.
    pub fn total_duration(&self) -> u64 {
        self.recordings.iter().map(|r| u64::from(r.duration())).sum()
    }

    pub(crate) fn into_recordings(self) -> Vec<Recording> {
        self.recordings
    }
}
