use nvr_calendar::{CalendarError, Date, YearMonth, days_in_month, is_leap_year};

#[test]
fn february_leap_rule() {
    assert_eq!(days_in_month(2024, 2).unwrap(), 29);
    assert_eq!(days_in_month(2023, 2).unwrap(), 28);
    assert_eq!(days_in_month(2000, 2).unwrap(), 29);
    assert_eq!(days_in_month(1900, 2).unwrap(), 28);
}

#[test]
fn year_length_matches_leap_flag() {
    for year in 1890..=2110 {
        let total: u32 = (1..=12u8)
            .map(|m| u32::from(days_in_month(year, m).unwrap()))
            .sum();
        let expected = if is_leap_year(year) { 366 } else { 365 };
        assert_eq!(total, expected, "year {year}");
    }
}

#[test]
fn last_day_of_month_is_valid_and_next_is_not() {
    for year in [1900, 2000, 2023, 2024] {
        for month in 1..=12u8 {
            let n = days_in_month(year, month).unwrap();
            assert!(Date::new(year, month, n).is_ok());
            assert_eq!(
                Date::new(year, month, n + 1).unwrap_err(),
                CalendarError::InvalidDay {
                    day: n + 1,
                    month,
                    year,
                    max_day: n,
                }
            );
        }
    }
}

#[test]
fn year_month_agrees_with_free_function() {
    for year in [1900, 2000, 2023, 2024] {
        for month in 1..=12u8 {
            let ym = YearMonth::new(year, month).unwrap();
            assert_eq!(ym.days_in_month(), days_in_month(year, month).unwrap());
        }
    }
}
