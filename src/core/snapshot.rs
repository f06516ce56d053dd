use chrono::Timelike;
use serde::Serialize;

/// Track metadata reported by the media player.
///
/// Either fully populated or entirely default: a missing or unparsable
/// length discards every other field too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaSnapshot {
    pub art_url: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub album_artist: String,
    /// Track length in microseconds.
    pub length_micros: u64,
}

/// Playback state reported by the media player.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerState {
    pub playing: bool,
    /// Seconds into the track; 0 when the player cannot say.
    pub position_secs: f64,
    /// Player volume as a fraction, 0.0 - 1.0.
    pub volume: f64,
    /// `None`, `Track` or `Playlist`, as reported by the player.
    pub loop_mode: String,
    pub shuffle: bool,
}

/// Charge level of one power-supply entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatterySnapshot {
    /// 0 when the capacity file is missing or unreadable.
    pub capacity_percent: i64,
}

/// Default sink state from the audio mixer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AudioSnapshot {
    pub muted: bool,
    /// Pre-formatted by the mixer, e.g. `"45%"`.
    pub volume_percent: String,
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClockSnapshot {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockSnapshot {
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        }
    }
}

/// Everything one tick knows about the system.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshots {
    /// Unix timestamp, in seconds.
    pub timestamp: i64,
    pub media: MediaSnapshot,
    pub player: PlayerState,
    pub battery: BatterySnapshot,
    pub audio: AudioSnapshot,
    pub clock: ClockSnapshot,
}
