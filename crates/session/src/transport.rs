//! Playback controls for the loaded recording.

use serde::Serialize;
use tracing::debug;

use crate::error::TransportError;

/// Playback speeds offered by the player.
pub const SPEEDS: [f64; 3] = [0.5, 1.0, 2.0];

/// Play/pause, volume, speed, and position of the player.
///
/// Speed is a viewer preference and survives loading another clip; the
/// play state and position do not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transport {
    playing: bool,
    muted: bool,
    volume: f64,
    speed: f64,
    position_secs: f64,
    duration_secs: u32,
}

impl Default for Transport {
    fn default() -> Self {
        Self {
            playing: false,
            muted: false,
            volume: 1.0,
            speed: 1.0,
            position_secs: 0.0,
            duration_secs: 0,
        }
    }
}

impl Transport {
    /// Returns `true` while playing.
    pub fn playing(&self) -> bool {
        self.playing
    }

    /// Returns `true` while muted.
    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Volume in 0.0..=1.0.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Returns the playback rate.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Returns the playhead position in seconds.
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    /// Length of the loaded clip; 0 when nothing is loaded.
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Returns `true` if a clip is loaded.
    pub fn is_loaded(&self) -> bool {
        self.duration_secs > 0
    }

    /// Loads a clip of `duration_secs`, paused at its start.
    pub fn load(&mut self, duration_secs: u32) {
        debug!(duration_secs, "clip loaded");
        self.duration_secs = duration_secs;
        self.position_secs = 0.0;
        self.playing = false;
    }

    /// Unloads the current clip.
    pub fn unload(&mut self) {
        self.load(0);
    }

    /// Flips between playing and paused, returning the new state.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::NothingLoaded`] if no clip is loaded.
    pub fn toggle_play(&mut self) -> Result<bool, TransportError> {
        if !self.is_loaded() {
            return Err(TransportError::NothingLoaded);
        }
        self.playing = !self.playing;
        Ok(self.playing)
    }

    /// Flips the mute flag, returning the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Sets the volume, clamped to 0.0..=1.0.
    ///
    /// A volume of 0 mutes; any audible volume clears a previous mute.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidVolume`] for NaN or infinite input.
    pub fn set_volume(&mut self, volume: f64) -> Result<(), TransportError> {
        if !volume.is_finite() {
            return Err(TransportError::InvalidVolume { value: volume });
        }
        self.volume = volume.clamp(0.0, 1.0);
        if self.volume == 0.0 {
            self.muted = true;
        } else if self.muted {
            self.muted = false;
        }
        Ok(())
    }

    /// Sets the playback speed.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::UnsupportedSpeed`] unless `speed` is one of
    /// [`SPEEDS`].
    pub fn set_speed(&mut self, speed: f64) -> Result<(), TransportError> {
        if !SPEEDS.contains(&speed) {
            return Err(TransportError::UnsupportedSpeed { speed });
        }
        self.speed = speed;
        Ok(())
    }

    /// Moves the playhead, clamped to the clip bounds.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::NothingLoaded`] if no clip is loaded, or
    /// [`TransportError::InvalidPosition`] for NaN or infinite input.
    pub fn seek(&mut self, secs: f64) -> Result<(), TransportError> {
        if !self.is_loaded() {
            return Err(TransportError::NothingLoaded);
        }
        if !secs.is_finite() {
            return Err(TransportError::InvalidPosition { value: secs });
        }
        self.position_secs = secs.clamp(0.0, f64::from(self.duration_secs));
        Ok(())
    }
}

/// Formats seconds as `m:ss`, e.g. `125.7` as `"2:05"`.
///
/// Negative and non-finite input formats as `"0:00"`.
pub fn format_time(secs: f64) -> String {
    let whole = if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn loaded(secs: u32) -> Transport {
        let mut t = Transport::default();
        t.load(secs);
        t
    }

    #[test]
    fn defaults() {
        let t = Transport::default();
        assert!(!t.playing());
        assert!(!t.muted());
        assert_abs_diff_eq!(t.volume(), 1.0);
        assert_abs_diff_eq!(t.speed(), 1.0);
        assert!(!t.is_loaded());
    }

    #[test]
    fn play_requires_clip() {
        let mut t = Transport::default();
        assert_eq!(t.toggle_play(), Err(TransportError::NothingLoaded));
        let mut t = loaded(90);
        assert_eq!(t.toggle_play(), Ok(true));
        assert_eq!(t.toggle_play(), Ok(false));
    }

    #[test]
    fn zero_volume_mutes_and_raise_unmutes() {
        let mut t = loaded(90);
        t.set_volume(0.0).unwrap();
        assert!(t.muted());
        t.set_volume(0.4).unwrap();
        assert!(!t.muted());
        assert_abs_diff_eq!(t.volume(), 0.4);
    }

    #[test]
    fn volume_clamped() {
        let mut t = loaded(90);
        t.set_volume(7.0).unwrap();
        assert_abs_diff_eq!(t.volume(), 1.0);
        t.set_volume(-1.0).unwrap();
        assert_abs_diff_eq!(t.volume(), 0.0);
        assert!(t.muted());
        assert!(t.set_volume(f64::NAN).is_err());
    }

    #[test]
    fn only_listed_speeds() {
        let mut t = Transport::default();
        for s in SPEEDS {
            t.set_speed(s).unwrap();
            assert_abs_diff_eq!(t.speed(), s);
        }
        assert_eq!(
            t.set_speed(1.5),
            Err(TransportError::UnsupportedSpeed { speed: 1.5 })
        );
        assert_abs_diff_eq!(t.speed(), 2.0);
    }

    #[test]
    fn seek_clamped_to_clip() {
        let mut t = loaded(90);
        t.seek(45.5).unwrap();
        assert_abs_diff_eq!(t.position_secs(), 45.5);
        t.seek(500.0).unwrap();
        assert_abs_diff_eq!(t.position_secs(), 90.0);
        t.seek(-3.0).unwrap();
        assert_abs_diff_eq!(t.position_secs(), 0.0);
        assert!(t.seek(f64::INFINITY).is_err());
    }

    #[test]
    fn load_resets_position_keeps_speed() {
        let mut t = loaded(90);
        t.set_speed(2.0).unwrap();
        t.toggle_play().unwrap();
        t.seek(30.0).unwrap();
        t.load(120);
        assert!(!t.playing());
        assert_abs_diff_eq!(t.position_secs(), 0.0);
        assert_abs_diff_eq!(t.speed(), 2.0);
        assert_eq!(t.duration_secs(), 120);
    }

    #[test]
    fn format_time_minutes_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(5.9), "0:05");
        assert_eq!(format_time(125.7), "2:05");
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(-4.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
    }
}
