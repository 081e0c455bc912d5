//! Search command: filter recordings across the whole archive.

use std::io::Write;

use anyhow::{Result, bail};
use tracing::{info, info_span};

use nvr_store::{RecordingStore, SearchFilter};

use crate::archive::Archive;
use crate::cli::SearchArgs;
use crate::render;

/// Builds a [`SearchFilter`] from the command-line arguments.
pub fn build_filter(args: &SearchArgs) -> Result<SearchFilter> {
    if let (Some(from), Some(to)) = (args.from, args.to)
        && from > to
    {
        bail!("--from {from} is after --to {to}");
    }
    if let (Some(min), Some(max)) = (args.min_duration, args.max_duration)
        && min > max
    {
        bail!("--min-duration {min} exceeds --max-duration {max}");
    }

    let mut filter = SearchFilter::default()
        .with_limit(args.limit)
        .with_offset(args.offset);
    if let Some(from) = args.from {
        filter = filter.with_date_from(from);
    }
    if let Some(to) = args.to {
        filter = filter.with_date_to(to);
    }
    if let Some(min) = args.min_duration {
        filter = filter.with_min_duration(min);
    }
    if let Some(max) = args.max_duration {
        filter = filter.with_max_duration(max);
    }
    if let Some(motion) = args.motion {
        filter = filter.with_motion(motion);
    }
    Ok(filter)
}

/// Print matching recordings, newest first.
pub fn run(archive: &Archive, args: SearchArgs) -> Result<()> {
    let _cmd = info_span!("search").entered();
    let filter = build_filter(&args)?;
    let results = archive.store.search(&filter);
    info!(n_results = results.len(), "search complete");

    let mut out = std::io::stdout().lock();
    if archive.json {
        render::json(&mut out, &results)?;
    } else {
        render::recordings(&mut out, &results)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nvr_calendar::Date;

    fn args() -> SearchArgs {
        SearchArgs {
            from: None,
            to: None,
            min_duration: None,
            max_duration: None,
            motion: None,
            limit: nvr_store::DEFAULT_LIMIT,
            offset: 0,
        }
    }

    #[test]
    fn default_args_default_filter() {
        assert_eq!(build_filter(&args()).unwrap(), SearchFilter::default());
    }

    #[test]
    fn inverted_ranges_rejected() {
        let mut a = args();
        a.from = Some(Date::new(2026, 10, 10).unwrap());
        a.to = Some(Date::new(2026, 10, 1).unwrap());
        assert!(build_filter(&a).is_err());

        let mut a = args();
        a.min_duration = Some(100);
        a.max_duration = Some(50);
        assert!(build_filter(&a).is_err());
    }

    #[test]
    fn all_fields_forwarded() {
        let mut a = args();
        a.min_duration = Some(60);
        a.motion = Some(true);
        a.limit = 5;
        a.offset = 2;
        let f = build_filter(&a).unwrap();
        assert_eq!(
            f,
            SearchFilter::default()
                .with_min_duration(60)
                .with_motion(true)
                .with_limit(5)
                .with_offset(2)
        );
    }
}
