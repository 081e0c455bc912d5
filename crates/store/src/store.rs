//! The recording store interface and its in-memory implementation.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use nvr_calendar::Date;
use serde::Serialize;
use tracing::debug;

use crate::day::DayRecordings;
use crate::error::StoreError;
use crate::recording::{RawRecording, Recording, RecordingId};
use crate::search::SearchFilter;

/// Read-only source of archive recordings.
///
/// Implementations are immutable for the lifetime of a session.
pub trait RecordingStore {
    /// Every date that has at least one recording.
    fn dates_with_recordings(&self) -> BTreeSet<Date>;

    /// Recordings of `date` in start-time order; empty if there are none.
    fn recordings_for_date(&self, date: Date) -> Vec<Recording>;

    /// Looks up a recording by identifier.
    fn get(&self, id: &RecordingId) -> Option<Recording>;

    /// Recordings across all days matching `filter`, newest first.
    fn search(&self, filter: &SearchFilter) -> Vec<Recording>;
}

impl<T: RecordingStore + ?Sized> RecordingStore for &T {
    fn dates_with_recordings(&self) -> BTreeSet<Date> {
        (**self).dates_with_recordings()
    }

    fn recordings_for_date(&self, date: Date) -> Vec<Recording> {
        (**self).recordings_for_date(date)
    }

    fn get(&self, id: &RecordingId) -> Option<Recording> {
        (**self).get(id)
    }

    fn search(&self, filter: &SearchFilter) -> Vec<Recording> {
        (**self).search(filter)
    }
}

/// Per-day recording count, as listed next to the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub date: Date,
    pub count: usize,
    pub total_duration: u64,
}

/// A validated archive held entirely in memory.
///
/// Days with no recordings are never stored, so every key of the day map
/// is a date with recordings.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    days: BTreeMap<Date, DayRecordings>,
    index: HashMap<RecordingId, (Date, usize)>,
}

impl InMemoryStore {
    /// Builds a store from day groups.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateDate`] if two groups share a date, or
    /// [`StoreError::DuplicateId`] if two recordings share an identifier.
    pub fn from_days(days: impl IntoIterator<Item = DayRecordings>) -> Result<Self, StoreError> {
        let mut store = Self::default();
        for day in days {
            let date = day.date();
            if store.days.contains_key(&date) {
                return Err(StoreError::DuplicateDate { date });
            }
            if day.is_empty() {
                debug!(%date, "skipping empty day group");
                continue;
            }
            for (pos, recording) in day.recordings().iter().enumerate() {
                if store
                    .index
                    .insert(recording.id().clone(), (date, pos))
                    .is_some()
                {
                    return Err(StoreError::DuplicateId {
                        id: recording.id().to_string(),
                    });
                }
            }
            store.days.insert(date, day);
        }
        debug!(n_days = store.days.len(), n_recordings = store.index.len(), "store built");
        Ok(store)
    }

    /// Builds a store from loose recordings, grouping them by date.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if two recordings share an identifier.
    pub fn from_recordings(
        recordings: impl IntoIterator<Item = Recording>,
    ) -> Result<Self, StoreError> {
        let mut grouped: BTreeMap<Date, Vec<Recording>> = BTreeMap::new();
        for r in recordings {
            grouped.entry(r.date()).or_default().push(r);
        }
        let days = grouped
            .into_iter()
            .map(|(date, recs)| DayRecordings::new(date, recs))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_days(days)
    }

    /// Decodes a JSON array of recordings and validates each one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] for malformed JSON, or the validation
    /// error of the first invalid recording.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let raw: Vec<RawRecording> = serde_json::from_str(json).map_err(|e| StoreError::Decode {
            reason: e.to_string(),
        })?;
        let recordings = raw
            .into_iter()
            .map(Recording::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_recordings(recordings)
    }

    /// Serializes every recording, oldest day first, as a JSON array that
    /// [`InMemoryStore::from_json`] accepts.
    pub fn to_json(&self) -> Result<String, StoreError> {
        let all: Vec<&Recording> = self
            .days
            .values()
            .flat_map(|d| d.recordings())
            .collect();
        serde_json::to_string_pretty(&all).map_err(|e| StoreError::Encode {
            reason: e.to_string(),
        })
    }

    /// The group for `date`, if it has recordings.
    pub fn day(&self, date: Date) -> Option<&DayRecordings> {
        self.days.get(&date)
    }

    /// Day groups, newest first.
    pub fn days_newest_first(&self) -> impl Iterator<Item = &DayRecordings> {
        self.days.values().rev()
    }

    /// Per-day counts, newest first.
    pub fn day_summaries(&self) -> Vec<DaySummary> {
        self.days_newest_first()
            .map(|d| DaySummary {
                date: d.date(),
                count: d.len(),
                total_duration: d.total_duration(),
            })
            .collect()
    }

    /// Total number of recordings.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the store holds no recordings.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Consumes the store, yielding its recordings oldest day first.
    pub fn into_recordings(self) -> Vec<Recording> {
        self.days
            .into_values()
            .flat_map(DayRecordings::into_recordings)
            .collect()
    }
}

impl RecordingStore for InMemoryStore {
    fn dates_with_recordings(&self) -> BTreeSet<Date> {
        self.days.keys().copied().collect()
    }

    fn recordings_for_date(&self, date: Date) -> Vec<Recording> {
        self.days
            .get(&date)
            .map(|d| d.recordings().to_vec())
            .unwrap_or_default()
    }

    fn get(&self, id: &RecordingId) -> Option<Recording> {
        let (date, pos) = self.index.get(id)?;
        self.days.get(date)?.recordings().get(*pos).cloned()
    }

    fn search(&self, filter: &SearchFilter) -> Vec<Recording> {
        let newest_first = self
            .days_newest_first()
            .filter(|d| filter.accepts_date(d.date()))
            .flat_map(|d| d.recordings().iter().rev());
        filter.apply(newest_first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nvr_timeline::ClockTime;

    fn rec(id: &str, date: Date, start: &str) -> Recording {
        Recording::new(
            RecordingId::new(id).unwrap(),
            date,
            ClockTime::parse(start).unwrap(),
            90,
            "file:///x.mp4",
        )
        .unwrap()
    }

    fn sample() -> InMemoryStore {
        let d1 = Date::new(2024, 3, 1).unwrap();
        let d2 = Date::new(2024, 3, 3).unwrap();
        InMemoryStore::from_recordings(vec![
            rec("b", d1, "12:00"),
            rec("a", d1, "08:00"),
            rec("c", d2, "23:00"),
        ])
        .unwrap()
    }

    #[test]
    fn dates_and_lists() {
        let store = sample();
        let dates: Vec<Date> = store.dates_with_recordings().into_iter().collect();
        assert_eq!(
            dates,
            [Date::new(2024, 3, 1).unwrap(), Date::new(2024, 3, 3).unwrap()]
        );
        let day1 = store.recordings_for_date(Date::new(2024, 3, 1).unwrap());
        assert_eq!(day1.len(), 2);
        assert_eq!(day1[0].id().as_str(), "a");
        assert!(
            store
                .recordings_for_date(Date::new(2024, 3, 2).unwrap())
                .is_empty()
        );
    }

    #[test]
    fn get_by_id() {
        let store = sample();
        let id = RecordingId::new("b").unwrap();
        assert_eq!(store.get(&id).unwrap().start_time().to_string(), "12:00");
        assert!(store.get(&RecordingId::new("zzz").unwrap()).is_none());
    }

    #[test]
    fn duplicate_id_rejected() {
        let d = Date::new(2024, 3, 1).unwrap();
        let err = InMemoryStore::from_recordings(vec![rec("a", d, "01:00"), rec("a", d, "02:00")])
            .unwrap_err();
        assert_eq!(err, StoreError::DuplicateId { id: "a".to_string() });
    }

    #[test]
    fn duplicate_date_rejected() {
        let d = Date::new(2024, 3, 1).unwrap();
        let g1 = DayRecordings::new(d, vec![rec("a", d, "01:00")]).unwrap();
        let g2 = DayRecordings::new(d, vec![rec("b", d, "02:00")]).unwrap();
        assert_eq!(
            InMemoryStore::from_days([g1, g2]).unwrap_err(),
            StoreError::DuplicateDate { date: d }
        );
    }

    #[test]
    fn empty_groups_are_dropped() {
        let d = Date::new(2024, 3, 1).unwrap();
        let store = InMemoryStore::from_days([DayRecordings::new(d, Vec::new()).unwrap()]).unwrap();
        assert!(store.dates_with_recordings().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn store_usable_by_reference() {
        fn count<S: RecordingStore>(store: S) -> usize {
            store.dates_with_recordings().len()
        }
        let store = sample();
        assert_eq!(count(&store), 2);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn search_newest_first() {
        let store = sample();
        let ids: Vec<String> = store
            .search(&SearchFilter::default())
            .iter()
            .map(|r| r.id().to_string())
            .collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }

    #[test]
    fn summaries_newest_first() {
        let s = sample().day_summaries();
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].date, Date::new(2024, 3, 3).unwrap());
        assert_eq!(s[0].count, 1);
        assert_eq!(s[1].count, 2);
        assert_eq!(s[1].total_duration, 180);
    }

    #[test]
    fn json_roundtrip_preserves_store() {
        let store = sample();
        let json = store.to_json().unwrap();
        let back = InMemoryStore::from_json(&json).unwrap();
        assert_eq!(back.dates_with_recordings(), store.dates_with_recordings());
        assert_eq!(back.len(), store.len());
    }

    #[test]
    fn json_rejects_zero_duration() {
        let json = r#"[{
            "id": "z",
            "date": "2024-03-01",
            "start_time": "10:00",
            "duration": 0,
            "video_url": "u"
        }]"#;
        assert!(matches!(
            InMemoryStore::from_json(json),
            Err(StoreError::InvalidDuration { secs: 0, .. })
        ));
    }

    #[test]
    fn json_rejects_garbage() {
        assert!(matches!(
            InMemoryStore::from_json("{not json"),
            Err(StoreError::Decode { .. })
        ));
    }
}
