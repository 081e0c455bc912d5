//! Timeline command: lay out one day's recordings on the 24-hour track.

use std::io::Write;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, info_span};

use nvr_session::{Command, Event, Session};
use nvr_store::RecordingId;

use crate::archive::Archive;
use crate::cli::TimelineArgs;
use crate::convert;
use crate::render;

/// Print the day's track and clip table.
pub fn run(archive: &Archive, args: TimelineArgs) -> Result<()> {
    let _cmd = info_span!("timeline", date = %args.date).entered();
    let layout = convert::build_layout_config(&archive.config.timeline)?;
    let zoom = convert::build_zoom(&archive.config.timeline, args.zoom)?;
    let mut session = Session::new(&archive.store, args.date.year_month())
        .with_layout(layout)?
        .with_zoom(zoom);

    accept(session.apply(Command::SelectDate { date: args.date }))?;
    if let Some(id) = args.select {
        let id = RecordingId::new(id).context("invalid --select")?;
        accept(session.apply(Command::SelectRecording { id }))?;
    }

    let view = session
        .timeline()?
        .ok_or_else(|| anyhow!("no timeline for {}", args.date))?;
    info!(n_clips = view.clips.len(), zoom = %view.zoom, "timeline laid out");

    let mut out = std::io::stdout().lock();
    if archive.json {
        render::json(&mut out, &view)?;
    } else {
        render::timeline(&mut out, &view, archive.config.timeline.track_columns)?;
    }
    out.flush()?;
    Ok(())
}

/// Fails on a rejected command.
fn accept(events: Vec<Event>) -> Result<()> {
    for event in events {
        if let Event::Rejected { reason } = event {
            bail!(reason);
        }
    }
    Ok(())
}
