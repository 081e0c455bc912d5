use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nvr_calendar::Date;
use serde::Deserialize;

/// Top-level viewer configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct NvrConfig {
    /// Generator RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Date treated as "today".
    #[serde(default)]
    pub anchor: Option<Date>,

    /// Recording source.
    #[serde(default)]
    pub store: StoreToml,

    /// Synthetic archive settings.
    #[serde(default)]
    pub generator: GeneratorToml,

    /// Timeline rendering settings.
    #[serde(default)]
    pub timeline: TimelineToml,
}

impl NvrConfig {
    /// Reads and parses a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct StoreToml {
    /// JSON array of recordings; the generator is used when unset.
    pub recordings: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorToml {
    #[serde(default = "default_days_ago")]
    pub days_ago: Vec<u32>,
    #[serde(default = "default_clips_per_day")]
    pub clips_per_day: [usize; 2],
    #[serde(default = "default_duration_secs")]
    pub duration_secs: [u32; 2],
    #[serde(default = "default_motion_probability")]
    pub motion_probability: f64,
    #[serde(default = "default_video_url")]
    pub video_url: String,
}

impl Default for GeneratorToml {
    fn default() -> Self {
        Self {
            days_ago: default_days_ago(),
            clips_per_day: default_clips_per_day(),
            duration_secs: default_duration_secs(),
            motion_probability: default_motion_probability(),
            video_url: default_video_url(),
        }
    }
}

fn default_days_ago() -> Vec<u32> {
    nvr_store::DEFAULT_DAYS_AGO.to_vec()
}
fn default_clips_per_day() -> [usize; 2] {
    [3, 7]
}
fn default_duration_secs() -> [u32; 2] {
    [30, 149]
}
fn default_motion_probability() -> f64 {
    0.3
}
fn default_video_url() -> String {
    nvr_store::SAMPLE_VIDEO_URL.to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineToml {
    #[serde(default = "default_min_clip_width")]
    pub min_clip_width: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    /// Character columns of the text track at zoom 1.0.
    #[serde(default = "default_track_columns")]
    pub track_columns: usize,
}

impl Default for TimelineToml {
    fn default() -> Self {
        Self {
            min_clip_width: default_min_clip_width(),
            zoom: default_zoom(),
            track_columns: default_track_columns(),
        }
    }
}

fn default_min_clip_width() -> f64 {
    nvr_timeline::DEFAULT_MIN_CLIP_WIDTH
}
fn default_zoom() -> f64 {
    1.0
}
fn default_track_columns() -> usize {
    72
}
