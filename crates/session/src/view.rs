//! Read-only timeline view of one day.

use nvr_calendar::Date;
use nvr_store::{Recording, RecordingId};
use nvr_timeline::{
    ClipLayout, HourMarker, LayoutConfig, TimelineError, Zoom, hour_markers, layout_clip,
};
use serde::Serialize;

/// One clip placed on the track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipView {
    pub id: RecordingId,
    pub motion_detected: bool,
    /// The clip is the one loaded in the player.
    pub selected: bool,
    #[serde(flatten)]
    pub layout: ClipLayout,
}

/// The 24-hour track of one day with every clip laid out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineView {
    pub date: Date,
    pub zoom: Zoom,
    /// Rendered track width relative to the viewport, in percent.
    pub track_width_percent: f64,
    pub markers: Vec<HourMarker>,
    pub clips: Vec<ClipView>,
}

impl TimelineView {
    /// Lays out `recordings` of `date`, flagging `selected` if present.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::InvalidMinWidth`] if `config` is invalid.
    pub fn build(
        date: Date,
        recordings: &[Recording],
        zoom: Zoom,
        config: &LayoutConfig,
        selected: Option<&RecordingId>,
    ) -> Result<Self, TimelineError> {
        let clips = recordings
            .iter()
            .map(|r| {
                Ok(ClipView {
                    id: r.id().clone(),
                    motion_detected: r.motion_detected(),
                    selected: selected == Some(r.id()),
                    layout: layout_clip(r.start_time(), r.duration(), config)?
                        .with_end(r.end_time()),
                })
            })
            .collect::<Result<Vec<_>, TimelineError>>()?;
        Ok(Self {
            date,
            zoom,
            track_width_percent: zoom.track_width_percent(),
            markers: hour_markers(),
            clips,
        })
    }

    /// The clip loaded in the player, if it is on this day.
    pub fn selected(&self) -> Option<&ClipView> {
        self.clips.iter().find(|c| c.selected)
    }
}
