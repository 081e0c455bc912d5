//! Month-level arithmetic for the Gregorian calendar.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};

use crate::date::Date;
use crate::error::CalendarError;
use crate::weekday::Weekday;

/// Number of days in each month of a common year (index 0 unused, index 1 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns `true` if `year` is a Gregorian leap year.
///
/// Divisible by 4, except centuries, except centuries divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub(crate) fn check_month(month: u8) -> Result<(), CalendarError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CalendarError::InvalidMonth { month })
    }
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    check_month(month)?;
    if month == 2 && is_leap_year(year) {
        Ok(29)
    } else {
        Ok(DAYS_PER_MONTH[month as usize])
    }
}

/// Returns the weekday of the first day of `month` in `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn first_weekday(year: i32, month: u8) -> Result<Weekday, CalendarError> {
    Ok(Date::new(year, month, 1)?.weekday())
}

/// A calendar month with year context, as displayed by the month grid.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// Creates a new `YearMonth`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12,
    /// or [`CalendarError::YearOutOfRange`] if the year is unsupported.
    pub fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
        let first = Date::new(year, month, 1)?;
        Ok(Self {
            first: first.into(),
        })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.first.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.first.month() as u8
    }

    /// Returns the month before this one, wrapping January to December of
    /// the previous year. Stays put at the first supported month.
    pub fn prev(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    /// Returns the month after this one, wrapping December to January of
    /// the next year. Stays put at the last supported month.
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    /// Number of days in this month.
    pub fn days_in_month(self) -> u8 {
        let month = self.month();
        if month == 2 && is_leap_year(self.year()) {
            29
        } else {
            DAYS_PER_MONTH[month as usize]
        }
    }

    /// Weekday of the first day of this month.
    pub fn first_weekday(self) -> Weekday {
        self.first_day().weekday()
    }

    /// The first day of this month.
    pub fn first_day(self) -> Date {
        Date::from(self.first)
    }

    /// Every day of this month, in order.
    pub fn days(self) -> impl Iterator<Item = Date> {
        self.first_day()
            .iter_days()
            .take(usize::from(self.days_in_month()))
    }

    /// Returns the date for `day` within this month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] if `day` is zero or past the end
    /// of the month.
    pub fn date(self, day: u8) -> Result<Date, CalendarError> {
        Date::new(self.year(), self.month(), day)
    }

    /// Returns `true` if `date` falls within this month.
    pub fn contains(self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// English month name, e.g. `"February"`.
    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[self.month() as usize]
    }

    /// Grid title, e.g. `"February 2024"`.
    pub fn name(self) -> String {
        format!("{} {}", self.month_name(), self.year())
    }
}

impl From<Date> for YearMonth {
    fn from(date: Date) -> Self {
        let first = NaiveDate::from(date);
        Self {
            first: first.with_day(1).unwrap_or(first),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl serde::Serialize for YearMonth {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CalendarError::InvalidFormat {
            input: s.to_string(),
            expected: "YYYY-MM",
        };
        let (y, m) = s.split_once('-').ok_or_else(bad)?;
        if y.len() != 4 || m.len() != 2 {
            return Err(bad());
        }
        let year: i32 = parse_digits(y).ok_or_else(bad)?;
        let month: u8 = parse_digits(m).ok_or_else(bad)?;
        Self::new(year, month)
    }
}

/// Parses an all-ASCII-digit field; rejects signs and whitespace that
/// `str::parse` would otherwise accept.
pub(crate) fn parse_digits<T: FromStr>(field: &str) -> Option<T> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
