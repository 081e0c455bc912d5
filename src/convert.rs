//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use nvr_store::MockConfig;
use nvr_timeline::{LayoutConfig, Zoom};

use crate::config::{GeneratorToml, TimelineToml};

/// Builds a validated [`MockConfig`] from the TOML generator configuration.
pub fn build_mock_config(generator: &GeneratorToml) -> Result<MockConfig> {
    let [min_clips, max_clips] = generator.clips_per_day;
    let [min_secs, max_secs] = generator.duration_secs;
    let cfg = MockConfig::default()
        .with_days_ago(generator.days_ago.clone())
        .with_clips_per_day(min_clips, max_clips)
        .with_duration_range(min_secs, max_secs)
        .with_motion_probability(generator.motion_probability)
        .with_video_url(&generator.video_url);
    cfg.validate().context("invalid [generator] settings")?;
    Ok(cfg)
}

/// Builds a validated [`LayoutConfig`] from the TOML timeline configuration.
pub fn build_layout_config(timeline: &TimelineToml) -> Result<LayoutConfig> {
    let cfg = LayoutConfig::new(timeline.min_clip_width);
    cfg.validate().context("invalid [timeline] min_clip_width")?;
    Ok(cfg)
}

/// Resolves the zoom factor, preferring a CLI override over the config.
pub fn build_zoom(timeline: &TimelineToml, cli_override: Option<f64>) -> Result<Zoom> {
    let value = cli_override.unwrap_or(timeline.zoom);
    Zoom::new(value).with_context(|| format!("invalid zoom {value}"))
}
