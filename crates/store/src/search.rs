//! Cross-day recording search with pagination.

use nvr_calendar::Date;

use crate::recording::Recording;

/// Default page size for [`SearchFilter`].
pub const DEFAULT_LIMIT: usize = 200;

/// Criteria for searching the whole archive.
///
/// Every bound is inclusive and optional. Results are ordered newest first
/// (by date, then start time) before `offset` and `limit` are applied.
///
/// # Example
///
/// ```
/// use nvr_store::SearchFilter;
///
/// let filter = SearchFilter::default()
///     .with_min_duration(60)
///     .with_motion(true)
///     .with_limit(10);
/// assert_eq!(filter.limit(), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter {
    date_from: Option<Date>,
    date_to: Option<Date>,
    min_duration: Option<u32>,
    max_duration: Option<u32>,
    motion: Option<bool>,
    limit: usize,
    offset: usize,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            date_from: None,
            date_to: None,
            min_duration: None,
            max_duration: None,
            motion: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl SearchFilter {
    /// Keeps clips dated on or after `date`.
    pub fn with_date_from(mut self, date: Date) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Keeps clips dated on or before `date`.
    pub fn with_date_to(mut self, date: Date) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Keeps clips lasting at least `secs` seconds.
    pub fn with_min_duration(mut self, secs: u32) -> Self {
        self.min_duration = Some(secs);
        self
    }

    /// Keeps clips lasting at most `secs` seconds.
    pub fn with_max_duration(mut self, secs: u32) -> Self {
        self.max_duration = Some(secs);
        self
    }

    /// Restricts results to clips with (or without) detected motion.
    pub fn with_motion(mut self, motion: bool) -> Self {
        self.motion = Some(motion);
        self
    }

    /// Sets the page size.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets how many matches to skip.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Returns the page size.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the number of skipped matches.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// `true` if `date` lies within the date bounds; used to skip whole days.
    pub fn accepts_date(&self, date: Date) -> bool {
        self.date_from.is_none_or(|from| date >= from) && self.date_to.is_none_or(|to| date <= to)
    }

    /// `true` if `recording` satisfies every criterion.
    pub fn matches(&self, recording: &Recording) -> bool {
        let secs = recording.duration();
        self.accepts_date(recording.date())
            && self.min_duration.is_none_or(|min| secs >= min)
            && self.max_duration.is_none_or(|max| secs <= max)
            && self.motion.is_none_or(|m| recording.motion_detected() == m)
    }

    /// Applies the filter and pagination to recordings already in
    /// newest-first order.
    pub fn apply<'a, I>(&self, newest_first: I) -> Vec<Recording>
    where
        I: IntoIterator<Item = &'a Recording>,
    {
        newest_first
            .into_iter()
            .filter(|r| self.matches(r))
            .skip(self.offset)
            .take(self.limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingId;
    use nvr_timeline::ClockTime;

    fn rec(id: &str, date: Date, secs: u32, motion: bool) -> Recording {
        Recording::new(
            RecordingId::new(id).unwrap(),
            date,
            ClockTime::parse("12:00").unwrap(),
            secs,
            "file:///x.mp4",
        )
        .unwrap()
        .with_motion(motion)
    }

    #[test]
    fn default_matches_everything() {
        let d = Date::new(2024, 1, 1).unwrap();
        let r = rec("a", d, 30, false);
        assert!(SearchFilter::default().matches(&r));
        assert_eq!(SearchFilter::default().limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn bounds_are_inclusive() {
        let d = Date::new(2024, 1, 10).unwrap();
        let r = rec("a", d, 60, true);
        let f = SearchFilter::default()
            .with_date_from(d)
            .with_date_to(d)
            .with_min_duration(60)
            .with_max_duration(60)
            .with_motion(true);
        assert!(f.matches(&r));
        assert!(!f.clone().with_motion(false).matches(&r));
        assert!(!f.clone().with_min_duration(61).matches(&r));
        assert!(!f.with_date_from(d.succ().unwrap()).matches(&r));
    }

    #[test]
    fn pagination() {
        let d = Date::new(2024, 1, 10).unwrap();
        let all: Vec<Recording> = (0..5).map(|i| rec(&format!("r{i}"), d, 60, false)).collect();
        let page = SearchFilter::default().with_offset(1).with_limit(2).apply(&all);
        let ids: Vec<&str> = page.iter().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, ["r1", "r2"]);

        let past_end = SearchFilter::default().with_offset(10).apply(&all);
        assert!(past_end.is_empty());
    }
}
