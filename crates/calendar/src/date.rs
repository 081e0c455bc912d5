//! Gregorian calendar date without a time-of-day component.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CalendarError;
use crate::month::{YearMonth, check_month, days_in_month, parse_digits};
use crate::weekday::Weekday;

/// A proleptic Gregorian calendar date.
///
/// Two dates are equal when year, month and day-of-month are equal; there is
/// no time-of-day to ignore. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month is outside 1..=12, the day
    /// does not exist in that month (including February 29 of common years),
    /// or the year is outside the supported range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        check_month(month)?;
        let max_day = days_in_month(year, month)?;
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(CalendarError::YearOutOfRange { year })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the month this date belongs to.
    pub fn year_month(self) -> YearMonth {
        YearMonth::from(self)
    }

    /// Day of the week.
    pub fn weekday(self) -> Weekday {
        Weekday::from_index(i64::from(self.0.weekday().num_days_from_sunday()))
    }

    /// Returns the date `n` days later (earlier when `n` is negative).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOverflow`] if the result falls outside
    /// the supported range.
    pub fn add_days(self, n: i64) -> Result<Self, CalendarError> {
        TimeDelta::try_days(n)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
            .ok_or(CalendarError::DateOverflow { date: self, days: n })
    }

    /// Returns the next day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOverflow`] on the last supported day.
    pub fn succ(self) -> Result<Self, CalendarError> {
        self.add_days(1)
    }

    /// Returns the previous day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOverflow`] on the first supported day.
    pub fn pred(self) -> Result<Self, CalendarError> {
        self.add_days(-1)
    }

    /// This date and the days after it, in order.
    pub fn iter_days(self) -> impl Iterator<Item = Date> {
        self.0.iter_days().map(Self)
    }

    /// Compact `YYYYMMDD` form, used in identifiers.
    pub fn compact(self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// Long English form, e.g. `"Monday, October 19, 2026"`.
    pub fn long_name(self) -> String {
        format!(
            "{}, {} {}, {}",
            self.weekday(),
            self.year_month().month_name(),
            self.day(),
            self.year()
        )
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for Date {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CalendarError::InvalidFormat {
            input: s.to_string(),
            expected: "YYYY-MM-DD",
        };
        let mut parts = s.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(bad());
        };
        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(bad());
        }
        let year: i32 = parse_digits(y).ok_or_else(bad)?;
        let month: u8 = parse_digits(m).ok_or_else(bad)?;
        let day: u8 = parse_digits(d).ok_or_else(bad)?;
        Self::new(year, month, day)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let date = Date::new(2024, 2, 29).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 29);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            Date::new(2000, 0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn new_invalid_day() {
        assert_eq!(
            Date::new(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                year: 2023,
                max_day: 28,
            }
        );
        assert!(Date::new(2023, 1, 0).is_err());
        assert!(Date::new(2023, 4, 31).is_err());
    }

    #[test]
    fn year_outside_supported_range() {
        assert_eq!(
            Date::new(300_000, 1, 1).unwrap_err(),
            CalendarError::YearOutOfRange { year: 300_000 }
        );
    }

    #[test]
    fn succ_month_and_year_boundaries() {
        let d = Date::new(2024, 2, 28).unwrap();
        assert_eq!(d.succ().unwrap(), Date::new(2024, 2, 29).unwrap());
        assert_eq!(d.add_days(2).unwrap(), Date::new(2024, 3, 1).unwrap());
        let d = Date::new(2023, 2, 28).unwrap();
        assert_eq!(d.succ().unwrap(), Date::new(2023, 3, 1).unwrap());
        let d = Date::new(2023, 12, 31).unwrap();
        assert_eq!(d.succ().unwrap(), Date::new(2024, 1, 1).unwrap());
        assert_eq!(d.succ().unwrap().pred().unwrap(), d);
    }

    #[test]
    fn add_days_negative() {
        let d = Date::new(2026, 10, 19).unwrap();
        assert_eq!(d.add_days(-28).unwrap(), Date::new(2026, 9, 21).unwrap());
        assert_eq!(d.add_days(-19).unwrap(), Date::new(2026, 9, 30).unwrap());
        assert_eq!(d.add_days(0).unwrap(), d);
    }

    #[test]
    fn add_days_overflow_is_an_error() {
        let last = Date::from(NaiveDate::MAX);
        assert_eq!(
            last.succ().unwrap_err(),
            CalendarError::DateOverflow { date: last, days: 1 }
        );
        let d = Date::new(2026, 10, 19).unwrap();
        assert!(d.add_days(i64::MAX).is_err());
        assert!(d.add_days(i64::MIN).is_err());
    }

    #[test]
    fn iter_days_crosses_leap_day() {
        let d = Date::new(2024, 2, 28).unwrap();
        let days: Vec<String> = d.iter_days().take(3).map(|d| d.to_string()).collect();
        assert_eq!(days, ["2024-02-28", "2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn weekday_known_dates() {
        assert_eq!(Date::new(2026, 10, 19).unwrap().weekday(), Weekday::Monday);
        assert_eq!(Date::new(2000, 2, 29).unwrap().weekday(), Weekday::Tuesday);
        assert_eq!(Date::new(1900, 1, 1).unwrap().weekday(), Weekday::Monday);
        assert_eq!(Date::new(1970, 1, 1).unwrap().weekday(), Weekday::Thursday);
    }

    #[test]
    fn parse_and_display() {
        let d: Date = "2024-03-05".parse().unwrap();
        assert_eq!(d, Date::new(2024, 3, 5).unwrap());
        assert_eq!(d.to_string(), "2024-03-05");
        assert_eq!(d.compact(), "20240305");
        assert_eq!(NaiveDate::from(d), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["2024-3-05", "2024/03/05", "2024-03-05-01", "", "2024-03", "2024-02-30"] {
            assert!(bad.parse::<Date>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn long_name() {
        let d = Date::new(2026, 10, 19).unwrap();
        assert_eq!(d.long_name(), "Monday, October 19, 2026");
    }

    #[test]
    fn ord_chronological() {
        let a = Date::new(2023, 12, 31).unwrap();
        let b = Date::new(2024, 1, 1).unwrap();
        assert!(a < b);
    }
}
