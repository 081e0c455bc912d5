//! Calendar command: print one month with recording markers.

use std::io::Write;

use anyhow::Result;
use tracing::{info, info_span};

use nvr_session::Session;

use crate::archive::Archive;
use crate::cli::CalendarArgs;
use crate::render;

/// Print the month grid.
pub fn run(archive: &Archive, args: CalendarArgs) -> Result<()> {
    let _cmd = info_span!("calendar").entered();
    let month = args.month.unwrap_or_else(|| archive.anchor.year_month());
    let session = Session::new(&archive.store, month);
    let grid = session.calendar_grid();
    info!(
        %month,
        n_marked = grid.day_cells().filter(|c| c.selectable()).count(),
        "month laid out"
    );

    let mut out = std::io::stdout().lock();
    if archive.json {
        render::json(&mut out, &grid)?;
    } else {
        render::calendar(&mut out, &grid)?;
    }
    out.flush()?;
    Ok(())
}
