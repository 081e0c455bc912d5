use nvr_calendar::{Date, YearMonth};

#[test]
fn twelve_steps_is_one_year() {
    let start = YearMonth::new(2024, 5).unwrap();
    let mut forward = start;
    let mut backward = start;
    for _ in 0..12 {
        forward = forward.next();
        backward = backward.prev();
    }
    assert_eq!(forward, YearMonth::new(2025, 5).unwrap());
    assert_eq!(backward, YearMonth::new(2023, 5).unwrap());
}

#[test]
fn navigation_ignores_day_component() {
    // Jumping from January 31 must land in February, not overflow to March.
    let jan31 = Date::new(2023, 1, 31).unwrap();
    let feb = jan31.year_month().next();
    assert_eq!(feb, YearMonth::new(2023, 2).unwrap());
    assert_eq!(feb.days_in_month(), 28);
}

#[test]
fn month_sequence_is_monotonic() {
    let mut month = YearMonth::new(1999, 11).unwrap();
    for _ in 0..50 {
        let next = month.next();
        assert!(next > month);
        month = next;
    }
}
