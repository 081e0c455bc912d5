//! Session command: replay a script of viewer commands and print events.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use nvr_session::{Command, Event, Session};

use crate::archive::Archive;
use crate::cli::SessionArgs;
use crate::convert;

/// Parses one JSON command per line; blank lines and `#` comments are skipped.
pub fn parse_script(script: &str) -> Result<Vec<Command>> {
    script
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("invalid command on line {}: {}", i + 1, line.trim()))
        })
        .collect()
}

/// Replay the script, printing each event as one JSON line.
pub fn run(archive: &Archive, args: SessionArgs) -> Result<()> {
    let _cmd = info_span!("session").entered();
    let script = if args.script.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read script from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args.script)
            .with_context(|| format!("failed to read script: {}", args.script.display()))?
    };
    let commands = parse_script(&script)?;
    info!(n_commands = commands.len(), "script parsed");

    let layout = convert::build_layout_config(&archive.config.timeline)?;
    let zoom = convert::build_zoom(&archive.config.timeline, None)?;
    let mut session = Session::new(&archive.store, archive.anchor.year_month())
        .with_layout(layout)?
        .with_zoom(zoom);

    let mut out = std::io::stdout().lock();
    let mut n_rejected = 0usize;
    for command in commands {
        for event in session.apply(command) {
            if matches!(event, Event::Rejected { .. }) {
                n_rejected += 1;
            }
            serde_json::to_writer(&mut out, &event)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    info!(n_rejected, selection = ?session.selection().date(), "script replayed");
    Ok(())
}
