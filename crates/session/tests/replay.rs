use approx::assert_abs_diff_eq;
use nvr_calendar::{Date, YearMonth};
use nvr_session::{Command, Event, Session};
use nvr_store::{InMemoryStore, Recording, RecordingId};
use nvr_timeline::ClockTime;

fn d(day: u8) -> Date {
    Date::new(2026, 10, day).unwrap()
}

fn rec(id: &str, date: Date, start: &str, secs: u32) -> Recording {
    Recording::new(
        RecordingId::new(id).unwrap(),
        date,
        ClockTime::parse(start).unwrap(),
        secs,
        "file:///clip.mp4",
    )
    .unwrap()
}

fn store() -> InMemoryStore {
    InMemoryStore::from_recordings(vec![
        rec("morning", d(14), "07:30", 95),
        rec("night", d(14), "23:59", 120),
        rec("noon", d(17), "12:00", 60),
    ])
    .unwrap()
}

const SCRIPT: &str = r#"
{"command":"select_date","date":"2026-10-14"}
{"command":"toggle_play"}
{"command":"set_speed","speed":2}
{"command":"select_recording","id":"night"}
{"command":"seek","position":500}
{"command":"zoom_in"}
{"command":"set_volume","volume":0}
{"command":"select_date","date":"2026-10-15"}
{"command":"back_to_calendar"}
{"command":"prev_month"}
"#;

fn parse(script: &str) -> Vec<Command> {
    script
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn scripted_session_produces_expected_events() {
    let mut s = Session::new(store(), YearMonth::new(2026, 10).unwrap());
    let events = s.run(parse(SCRIPT));

    let kinds: Vec<&str> = events
        .iter()
        .map(|e| match e {
            Event::DateSelected { .. } => "date",
            Event::RecordingSelected { .. } => "recording",
            Event::ReturnedToCalendar => "back",
            Event::MonthChanged { .. } => "month",
            Event::ZoomChanged { .. } => "zoom",
            Event::PlaybackChanged { .. } => "playback",
            Event::Rejected { .. } => "rejected",
        })
        .collect();
    assert_eq!(
        kinds,
        [
            "date", "playback", // select_date
            "playback", // toggle_play
            "playback", // set_speed
            "recording", "playback", // select_recording
            "playback", // seek
            "zoom",     // zoom_in
            "playback", // set_volume
            "rejected", // empty date
            "back",     // back_to_calendar
            "month",    // prev_month
        ]
    );
    assert_eq!(s.month(), YearMonth::new(2026, 9).unwrap());
    assert!(s.selection().is_browsing());
    assert_abs_diff_eq!(s.zoom().value(), 1.5);
}

#[test]
fn transport_state_follows_commands() {
    let mut s = Session::new(store(), YearMonth::new(2026, 10).unwrap());
    s.run(parse(SCRIPT).into_iter().take(5));

    let t = s.transport();
    // Loading "night" paused playback but kept the speed.
    assert!(!t.playing());
    assert_abs_diff_eq!(t.speed(), 2.0);
    assert_eq!(t.duration_secs(), 120);
    assert_abs_diff_eq!(t.position_secs(), 120.0);

    let view = s.timeline().unwrap().unwrap();
    let night = view.selected().unwrap();
    assert_eq!(night.id.as_str(), "night");
    assert!(night.layout.wraps_midnight);
    assert!(night.layout.rendered_left + night.layout.rendered_width <= 100.0 + 1e-9);
}

#[test]
fn events_serialize_as_json_lines() {
    let mut s = Session::new(store(), YearMonth::new(2026, 10).unwrap());
    let events = s.apply(Command::SelectDate { date: d(17) });
    let line = serde_json::to_string(&events[0]).unwrap();
    assert_eq!(
        line,
        r#"{"event":"date_selected","date":"2026-10-17","recording":"noon"}"#
    );
}
