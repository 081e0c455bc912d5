//! Synthetic archive generator.

use nvr_calendar::Date;
use nvr_timeline::ClockTime;
use rand::Rng;
use tracing::{debug, info};

use crate::day::DayRecordings;
use crate::error::StoreError;
use crate::recording::{Recording, RecordingId};
use crate::store::InMemoryStore;

/// Sample clip every generated recording points at.
pub const SAMPLE_VIDEO_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

/// Days before the anchor date that receive recordings by default.
pub const DEFAULT_DAYS_AGO: [u32; 12] = [1, 2, 5, 7, 10, 12, 15, 18, 20, 23, 25, 28];

/// Settings for [`generate`].
///
/// # Example
///
/// ```
/// use nvr_store::MockConfig;
///
/// let config = MockConfig::default().with_clips_per_day(1, 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MockConfig {
    days_ago: Vec<u32>,
    min_clips: usize,
    max_clips: usize,
    min_duration: u32,
    max_duration: u32,
    motion_probability: f64,
    video_url: String,
}

impl Default for MockConfig {
    /// Twelve days within the last four weeks, 3 to 7 clips a day, each
    /// 30 to 149 seconds long.
    fn default() -> Self {
        Self {
            days_ago: DEFAULT_DAYS_AGO.to_vec(),
            min_clips: 3,
            max_clips: 7,
            min_duration: 30,
            max_duration: 149,
            motion_probability: 0.3,
            video_url: SAMPLE_VIDEO_URL.to_string(),
        }
    }
}

impl MockConfig {
    /// Sets which days before the anchor receive recordings.
    pub fn with_days_ago(mut self, days_ago: Vec<u32>) -> Self {
        self.days_ago = days_ago;
        self
    }

    /// Sets the inclusive range of clips generated per day.
    pub fn with_clips_per_day(mut self, min: usize, max: usize) -> Self {
        self.min_clips = min;
        self.max_clips = max;
        self
    }

    /// Sets the inclusive range of clip durations, in seconds.
    pub fn with_duration_range(mut self, min: u32, max: u32) -> Self {
        self.min_duration = min;
        self.max_duration = max;
        self
    }

    /// Sets the chance that a clip is flagged with motion.
    pub fn with_motion_probability(mut self, p: f64) -> Self {
        self.motion_probability = p;
        self
    }

    /// Sets the media locator of every clip.
    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = url.into();
        self
    }

    /// Returns the day offsets that receive recordings.
    pub fn days_ago(&self) -> &[u32] {
        &self.days_ago
    }

    /// Returns the inclusive clip-count range per day.
    pub fn clips_per_day(&self) -> (usize, usize) {
        (self.min_clips, self.max_clips)
    }

    /// Returns the inclusive clip duration range in seconds.
    pub fn duration_range(&self) -> (u32, u32) {
        (self.min_duration, self.max_duration)
    }

    /// Validates this configuration.
    ///
    /// Requires at least one clip per day, positive durations, ordered
    /// ranges, unique day offsets, and a probability within 0..=1.
    pub fn validate(&self) -> Result<(), StoreError> {
        let invalid = |reason: String| Err(StoreError::InvalidConfig { reason });
        if self.min_clips == 0 || self.min_clips > self.max_clips {
            return invalid(format!(
                "clips per day must satisfy 1 <= min <= max, got {}..={}",
                self.min_clips, self.max_clips
            ));
        }
        if self.min_duration == 0 || self.min_duration > self.max_duration {
            return invalid(format!(
                "clip duration must satisfy 1 <= min <= max, got {}..={}",
                self.min_duration, self.max_duration
            ));
        }
        if !(0.0..=1.0).contains(&self.motion_probability) {
            return invalid(format!(
                "motion probability must be within 0..=1, got {}",
                self.motion_probability
            ));
        }
        let mut seen = self.days_ago.clone();
        seen.sort_unstable();
        if let Some(w) = seen.windows(2).find(|w| w[0] == w[1]) {
            return invalid(format!("day offset {} listed twice", w[0]));
        }
        if self.video_url.is_empty() {
            return invalid("video url must not be empty".to_string());
        }
        Ok(())
    }
}

/// Generates one day's clips at uniformly random start times.
fn generate_day<R: Rng>(
    date: Date,
    config: &MockConfig,
    rng: &mut R,
) -> Result<DayRecordings, StoreError> {
    let n_clips = rng.random_range(config.min_clips..=config.max_clips);
    let mut recordings = Vec::with_capacity(n_clips);
    for i in 0..n_clips {
        let hour = rng.random_range(0..24u8);
        let minute = rng.random_range(0..60u8);
        let duration = rng.random_range(config.min_duration..=config.max_duration);
        let start = ClockTime::new(hour, minute)
            .map_err(|source| StoreError::InvalidTime {
                id: format!("rec-{}-{i}", date.compact()),
                source,
            })?;
        let id = RecordingId::new(format!("rec-{}-{i}", date.compact()))?;
        let motion = rng.random_bool(config.motion_probability);
        recordings.push(
            Recording::new(id, date, start, duration, config.video_url.as_str())?
                .with_motion(motion),
        );
    }
    debug!(%date, n_clips, "generated day");
    DayRecordings::new(date, recordings)
}

/// Generates a synthetic archive relative to `anchor` ("today").
///
/// Each configured offset `n` yields the day `anchor - n` with a random
/// number of clips; the anchor itself never has recordings unless `0` is
/// listed. Output is fully determined by the RNG state.
///
/// # Errors
///
/// Returns [`StoreError::InvalidConfig`] if the configuration is invalid,
/// or [`StoreError::DateRange`] if an offset steps outside the calendar.
#[tracing::instrument(skip(config, rng), fields(n_days = config.days_ago.len()))]
pub fn generate<R: Rng>(
    anchor: Date,
    config: &MockConfig,
    rng: &mut R,
) -> Result<InMemoryStore, StoreError> {
    config.validate()?;
    let days = config
        .days_ago
        .iter()
        .map(|&n| generate_day(anchor.add_days(-i64::from(n))?, config, rng))
        .collect::<Result<Vec<_>, _>>()?;
    let store = InMemoryStore::from_days(days)?;
    info!(n_recordings = store.len(), "synthetic archive generated");
    Ok(store)
}
