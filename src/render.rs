//! Text and JSON rendering of the viewer model.

use std::io::Write;

use anyhow::Result;
use nvr_calendar::{Cell, MonthGrid};
use nvr_session::{TimelineView, format_time};
use nvr_store::{DaySummary, Recording};
use nvr_timeline::Zoom;
use serde::Serialize;

/// Hours between ruler labels on the text track.
const RULER_EVERY_HOURS: u8 = 3;

/// Writes `value` as pretty JSON followed by a newline.
pub fn json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)?;
    Ok(())
}

/// Month grid, one row per week.
///
/// Days with recordings carry `*`, the selected day `#`.
pub fn calendar<W: Write>(w: &mut W, grid: &MonthGrid) -> Result<()> {
    writeln!(w, "{:^28}", grid.month().name())?;
    for name in MonthGrid::header() {
        write!(w, "{name:>3} ")?;
    }
    writeln!(w)?;
    for row in grid.rows() {
        let line: String = row.iter().map(cell_text).collect();
        writeln!(w, "{}", line.trim_end())?;
    }
    writeln!(w, "* recordings  # selected")?;
    Ok(())
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Empty => "    ".to_string(),
        Cell::Day {
            date,
            has_recordings,
            selected,
        } => {
            let mark = match (selected, has_recordings) {
                (true, _) => '#',
                (false, true) => '*',
                (false, false) => ' ',
            };
            format!("{:>3}{mark}", date.day())
        }
    }
}

/// The day's track as a character strip followed by a clip table.
///
/// `columns` is the strip width at zoom 1.0; it scales with the zoom.
pub fn timeline<W: Write>(w: &mut W, view: &TimelineView, columns: usize) -> Result<()> {
    let cols = ((columns as f64) * view.zoom.value()).round().max(1.0) as usize;
    writeln!(
        w,
        "{}  zoom {}  {} clip(s)",
        view.date.long_name(),
        view.zoom,
        view.clips.len()
    )?;

    let mut ruler = vec![' '; cols + 6];
    for marker in view
        .markers
        .iter()
        .filter(|m| m.hour % RULER_EVERY_HOURS == 0 && m.hour < 24)
    {
        let at = column(view.zoom, marker.percent, columns);
        for (i, ch) in marker.label.chars().enumerate() {
            if let Some(slot) = ruler.get_mut(at + i) {
                *slot = ch;
            }
        }
    }
    let ruler: String = ruler.into_iter().collect();
    writeln!(w, "{}", ruler.trim_end())?;

    let mut track = vec!['-'; cols];
    for clip in &view.clips {
        let end = clip.layout.rendered_left + clip.layout.rendered_width;
        let from = column(view.zoom, clip.layout.rendered_left, columns).min(cols - 1);
        let to = column_ceil(view.zoom, end, columns).clamp(from + 1, cols);
        let ch = if clip.selected { '@' } else { '#' };
        track[from..to].fill(ch);
    }
    let track: String = track.into_iter().collect();
    writeln!(w, "|{track}|")?;
    writeln!(w)?;

    writeln!(
        w,
        "{:<20} {:>5} {:>5} {:>5} {:>7} {:>7}  FLAGS",
        "ID", "START", "END", "DUR", "LEFT%", "WIDTH%"
    )?;
    for clip in &view.clips {
        let mut flags = Vec::new();
        if clip.selected {
            flags.push("selected");
        }
        if clip.motion_detected {
            flags.push("motion");
        }
        if clip.layout.wraps_midnight {
            flags.push("wraps");
        }
        writeln!(
            w,
            "{:<20} {:>5} {:>5} {:>5} {:>7.3} {:>7.3}  {}",
            clip.id.as_str(),
            clip.layout.start.to_string(),
            clip.layout.end.to_string(),
            clip.layout.duration_label,
            clip.layout.left,
            clip.layout.width,
            flags.join(",")
        )?;
    }
    Ok(())
}

/// Strip column of a track percentage, `columns` being the unzoomed width.
fn column(zoom: Zoom, percent: f64, columns: usize) -> usize {
    zoom.to_pixels(percent, columns as f64).floor().max(0.0) as usize
}

fn column_ceil(zoom: Zoom, percent: f64, columns: usize) -> usize {
    zoom.to_pixels(percent, columns as f64).ceil().max(0.0) as usize
}

/// One line per recording.
pub fn recordings<W: Write>(w: &mut W, recordings: &[Recording]) -> Result<()> {
    writeln!(
        w,
        "{:<20} {:<10} {:>5} {:>5} {:>6}  MOTION",
        "ID", "DATE", "START", "END", "LENGTH"
    )?;
    for r in recordings {
        writeln!(
            w,
            "{:<20} {:<10} {:>5} {:>5} {:>6}  {}",
            r.id().as_str(),
            r.date().to_string(),
            r.start_time().to_string(),
            r.end_time().to_string(),
            format_time(f64::from(r.duration())),
            if r.motion_detected() { "yes" } else { "no" }
        )?;
    }
    writeln!(w, "{} recording(s)", recordings.len())?;
    Ok(())
}

/// One line per day with recordings.
pub fn days<W: Write>(w: &mut W, summaries: &[DaySummary]) -> Result<()> {
    writeln!(w, "{:<10} {:<4} {:>5} {:>7}", "DATE", "DAY", "CLIPS", "TOTAL")?;
    for s in summaries {
        writeln!(
            w,
            "{:<10} {:<4} {:>5} {:>7}",
            s.date.to_string(),
            s.date.weekday().short_name(),
            s.count,
            format_time(s.total_duration as f64)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use nvr_calendar::{Date, YearMonth};
    use nvr_store::RecordingId;
    use nvr_timeline::{ClockTime, LayoutConfig};

    fn text(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn calendar_marks_days() {
        let month = YearMonth::new(2026, 10).unwrap();
        let dates: BTreeSet<Date> = [
            Date::new(2026, 10, 5).unwrap(),
            Date::new(2026, 10, 18).unwrap(),
        ]
        .into_iter()
        .collect();
        let grid = MonthGrid::build(month, &dates, Some(Date::new(2026, 10, 18).unwrap()));
        let out = text(|w| calendar(w, &grid));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].trim(), "October 2026");
        assert!(lines[1].starts_with("Sun Mon"));
        // October 1, 2026 is a Thursday.
        assert_eq!(lines[2], "                  1   2   3");
        assert!(out.contains("  5*"));
        assert!(out.contains(" 18#"));
    }

    #[test]
    fn timeline_strip_scales_with_zoom() {
        let date = Date::new(2026, 10, 18).unwrap();
        let rec = Recording::new(
            RecordingId::new("rec-1").unwrap(),
            date,
            ClockTime::parse("12:00").unwrap(),
            3000,
            "file:///x.mp4",
        )
        .unwrap();
        let id = rec.id().clone();
        let view = TimelineView::build(
            date,
            &[rec],
            Zoom::new(2.0).unwrap(),
            &LayoutConfig::default(),
            Some(&id),
        )
        .unwrap();
        let out = text(|w| timeline(w, &view, 48));
        let strip = out.lines().find(|l| l.starts_with('|')).unwrap();
        assert_eq!(strip.chars().count(), 96 + 2);
        // 50 minutes at 4 columns per hour spans columns 48..52.
        assert_eq!(&strip[49..53], "@@@@");
        assert!(out.contains("selected"));
    }

    #[test]
    fn days_table() {
        let summaries = [DaySummary {
            date: Date::new(2026, 10, 18).unwrap(),
            count: 4,
            total_duration: 125,
        }];
        let out = text(|w| days(w, &summaries));
        assert!(out.lines().nth(1).unwrap().starts_with("2026-10-18 Sun      4    2:05"));
    }
}
