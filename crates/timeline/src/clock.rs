//! Day-relative wall-clock time with minute resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimelineError;

/// Minutes in one day; the length of the timeline track.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Seconds in one day.
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// A time of day between `00:00` and `23:59`.
///
/// Ordering is chronological within the day, which matches the
/// lexicographic order of the fixed-width `HH:MM` text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Midnight, the left edge of the track.
    pub const MIDNIGHT: ClockTime = ClockTime { minutes: 0 };

    /// Creates a time from hour and minute.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::InvalidTime`] if `hour > 23` or `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimelineError> {
        if hour > 23 || minute > 59 {
            return Err(TimelineError::InvalidTime {
                input: format!("{hour:02}:{minute:02}"),
            });
        }
        Ok(Self {
            minutes: u16::from(hour) * 60 + u16::from(minute),
        })
    }

    /// Parses strict `HH:MM` text.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::InvalidTime`] for anything that is not two
    /// ASCII digits, a colon, and two ASCII digits within range.
    pub fn parse(input: &str) -> Result<Self, TimelineError> {
        let bad = || TimelineError::InvalidTime {
            input: input.to_string(),
        };
        let bytes = input.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(bad());
        }
        let digit = |i: usize| -> Result<u8, TimelineError> {
            let b = bytes[i];
            if b.is_ascii_digit() {
                Ok(b - b'0')
            } else {
                Err(bad())
            }
        };
        let hour = digit(0)? * 10 + digit(1)?;
        let minute = digit(3)? * 10 + digit(4)?;
        Self::new(hour, minute).map_err(|_| bad())
    }

    /// Builds a time from minutes since midnight, wrapping modulo one day.
    pub fn from_minutes(minutes: u32) -> Self {
        Self {
            minutes: (minutes % u32::from(MINUTES_PER_DAY)) as u16,
        }
    }

    /// Hour component (0..=23).
    pub fn hour(self) -> u8 {
        (self.minutes / 60) as u8
    }

    /// Minute component (0..=59).
    pub fn minute(self) -> u8 {
        (self.minutes % 60) as u8
    }

    /// Minutes since midnight (0..=1439).
    pub fn minutes_of_day(self) -> u16 {
        self.minutes
    }

    /// Adds the whole minutes of `secs`, wrapping past midnight.
    ///
    /// Sub-minute remainders are dropped, so `23:50` plus 120 seconds is
    /// `23:52` and `23:59` plus 90 seconds is `00:00`.
    pub fn add_seconds(self, secs: u32) -> Self {
        Self::from_minutes(u32::from(self.minutes) + secs / 60)
    }

    /// Horizontal position on a 24-hour track, as a percentage (0..100).
    pub fn position(self) -> f64 {
        f64::from(self.minutes) / f64::from(MINUTES_PER_DAY) * 100.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
