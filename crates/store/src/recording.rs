//! A single recorded clip.

use std::fmt;

use nvr_calendar::Date;
use nvr_timeline::ClockTime;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Opaque, unique recording identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct RecordingId(String);

impl RecordingId {
    /// Wraps an identifier string.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyId`] if `id` is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, StoreError> {
        let id = id.into();
        if id.is_empty() {
            return Err(StoreError::EmptyId);
        }
        Ok(Self(id))
    }

    /// The identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RecordingId {
    type Error = StoreError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl fmt::Display for RecordingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One recorded clip.
///
/// Constructed only through validation: the duration is always positive
/// and both times are valid `HH:MM` values. The end time may be earlier
/// than the start time when the clip runs past midnight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recording {
    id: RecordingId,
    date: Date,
    start_time: ClockTime,
    end_time: ClockTime,
    duration: u32,
    video_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail_url: Option<String>,
    motion_detected: bool,
}

impl Recording {
    /// Creates a recording; the end time is the start plus the whole minutes
    /// of `duration_secs`, wrapping past midnight.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidDuration`] if `duration_secs` is zero.
    pub fn new(
        id: RecordingId,
        date: Date,
        start_time: ClockTime,
        duration_secs: u32,
        video_url: impl Into<String>,
    ) -> Result<Self, StoreError> {
        if duration_secs == 0 {
            return Err(StoreError::InvalidDuration {
                id: id.to_string(),
                secs: 0,
            });
        }
        Ok(Self {
            end_time: start_time.add_seconds(duration_secs),
            id,
            date,
            start_time,
            duration: duration_secs,
            video_url: video_url.into(),
            thumbnail_url: None,
            motion_detected: false,
        })
    }

    /// Sets the thumbnail locator.
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    /// Sets the motion flag.
    pub fn with_motion(mut self, motion_detected: bool) -> Self {
        self.motion_detected = motion_detected;
        self
    }

    /// Overrides the computed end time with a stored one.
    pub fn with_end_time(mut self, end_time: ClockTime) -> Self {
        self.end_time = end_time;
        self
    }

    /// Returns the identifier.
    pub fn id(&self) -> &RecordingId {
        &self.id
    }

    /// Returns the day the clip belongs to.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the start time.
    pub fn start_time(&self) -> ClockTime {
        self.start_time
    }

    /// Returns the end time, computed or as recorded.
    pub fn end_time(&self) -> ClockTime {
        self.end_time
    }

    /// Duration in seconds, always > 0.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Returns the media locator.
    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    /// Returns the thumbnail locator, if any.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }

    /// Returns `true` if the recorder flagged motion.
    pub fn motion_detected(&self) -> bool {
        self.motion_detected
    }
}

/// Unvalidated recording as it arrives from an external source.
///
/// Times are `HH:MM` text and the duration is signed so that zero and
/// negative values can be reported instead of silently wrapping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawRecording {
    pub id: String,
    pub date: String,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    pub duration: i64,
    pub video_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub motion_detected: bool,
}

impl TryFrom<RawRecording> for Recording {
    type Error = StoreError;

    fn try_from(raw: RawRecording) -> Result<Self, Self::Error> {
        let id = RecordingId::new(raw.id)?;
        let date: Date = raw.date.parse().map_err(|source| StoreError::InvalidDate {
            id: id.to_string(),
            source,
        })?;
        let start = ClockTime::parse(&raw.start_time).map_err(|source| StoreError::InvalidTime {
            id: id.to_string(),
            source,
        })?;
        let duration = u32::try_from(raw.duration)
            .ok()
            .filter(|&d| d > 0)
            .ok_or_else(|| StoreError::InvalidDuration {
                id: id.to_string(),
                secs: raw.duration,
            })?;

        let mut recording = Recording::new(id, date, start, duration, raw.video_url)?
            .with_motion(raw.motion_detected);
        if let Some(end) = raw.end_time {
            let end = ClockTime::parse(&end).map_err(|source| StoreError::InvalidTime {
                id: recording.id.to_string(),
                source,
            })?;
            recording = recording.with_end_time(end);
        }
        if let Some(thumb) = raw.thumbnail_url {
            recording = recording.with_thumbnail(thumb);
        }
        Ok(recording)
    }
}
