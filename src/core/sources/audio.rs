//! Audio mixer adapter, backed by `pactl` in JSON output mode.

use serde::Deserialize;

use crate::core::snapshot::AudioSnapshot;
use crate::error::Result;
use crate::platform::ProcessRunner;

const PACTL: &str = "pactl";
const DEFAULT_SINK: &str = "@DEFAULT_SINK@";

#[derive(Debug, Deserialize)]
struct SinkMute {
    mute: bool,
}

#[derive(Debug, Deserialize)]
struct SinkVolume {
    volume: ChannelVolumes,
}

// Only the front-left channel is read; stereo sinks report the same level on both.
#[derive(Debug, Deserialize)]
struct ChannelVolumes {
    #[serde(rename = "front-left")]
    front_left: ChannelVolume,
}

#[derive(Debug, Deserialize)]
struct ChannelVolume {
    value_percent: String,
}

/// Query mute state and volume of the default sink.
///
/// Both responses must parse; otherwise the snapshot is left at its default.
pub fn query_audio(runner: &dyn ProcessRunner) -> AudioSnapshot {
    try_query_audio(runner).unwrap_or_else(|e| {
        log::debug!("audio mixer unavailable: {}", e);
        AudioSnapshot::default()
    })
}

fn try_query_audio(runner: &dyn ProcessRunner) -> Result<AudioSnapshot> {
    let mute_json = runner.run(PACTL, &["-f", "json", "get-sink-mute", DEFAULT_SINK])?;
    let volume_json = runner.run(PACTL, &["-f", "json", "get-sink-volume", DEFAULT_SINK])?;

    let mute: SinkMute = serde_json::from_str(&mute_json)?;
    let volume: SinkVolume = serde_json::from_str(&volume_json)?;

    Ok(AudioSnapshot {
        muted: mute.mute,
        volume_percent: volume.volume.front_left.value_percent,
    })
}
