//! Error types for the nvr-calendar crate.

use crate::date::Date;

/// Error type for all fallible operations in the nvr-calendar crate.
///
/// This enum covers validation failures for month numbers, day-within-month
/// values in the Gregorian calendar, and textual date parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number is zero or exceeds the length of the month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year, needed because February depends on it.
        year: i32,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a string is not a `YYYY-MM-DD` date or `YYYY-MM` month.
    #[error("invalid date format: {input:?} (expected {expected})")]
    InvalidFormat {
        /// The text that failed to parse.
        input: String,
        /// The expected shape, e.g. `YYYY-MM-DD`.
        expected: &'static str,
    },

    /// Returned when a year is outside the range the calendar can represent.
    #[error("year {year} is out of range")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },

    /// Returned when stepping a date leaves the representable range.
    #[error("{date} plus {days} day(s) is out of range")]
    DateOverflow {
        /// The starting date.
        date: Date,
        /// The requested offset in days.
        days: i64,
    },
}
