//! Days command: list days with recordings, newest first.

use std::io::Write;

use anyhow::Result;
use tracing::{info, info_span};

use crate::archive::Archive;
use crate::render;

/// Print per-day clip counts.
pub fn run(archive: &Archive) -> Result<()> {
    let _cmd = info_span!("days").entered();
    let summaries = archive.store.day_summaries();
    info!(n_days = summaries.len(), "days listed");

    let mut out = std::io::stdout().lock();
    if archive.json {
        render::json(&mut out, &summaries)?;
    } else {
        render::days(&mut out, &summaries)?;
    }
    out.flush()?;
    Ok(())
}
