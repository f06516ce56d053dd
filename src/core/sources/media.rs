//! Media player adapter, backed by `playerctl`.

use crate::core::snapshot::{MediaSnapshot, PlayerState};
use crate::error::{Result, StatlineError};
use crate::platform::ProcessRunner;

const PLAYERCTL: &str = "playerctl";

/// Thin wrapper that prefixes every `playerctl` call with an optional `--player=`.
pub struct Playerctl<'a> {
    runner: &'a dyn ProcessRunner,
    selector: Option<String>,
}

impl<'a> Playerctl<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, player: Option<&str>) -> Self {
        Self {
            runner,
            selector: player.map(|name| format!("--player={}", name)),
        }
    }

    pub fn run(&self, args: &[&str]) -> Result<String> {
        let mut full_args = Vec::with_capacity(args.len() + 1);
        if let Some(selector) = &self.selector {
            full_args.push(selector.as_str());
        }
        full_args.extend_from_slice(args);

        self.runner.run(PLAYERCTL, &full_args)
    }

    /// Like [`Playerctl::run`], but a failed call is just an empty string.
    fn text(&self, args: &[&str]) -> String {
        self.run(args).unwrap_or_default()
    }
}

/// Query the current track's metadata.
///
/// The track length gates the whole snapshot: when it cannot be read as an
/// unsigned integer, every field is left at its default.
pub fn query_metadata(playerctl: &Playerctl) -> MediaSnapshot {
    try_query_metadata(playerctl).unwrap_or_else(|e| {
        log::debug!("media metadata unavailable: {}", e);
        MediaSnapshot::default()
    })
}

fn try_query_metadata(playerctl: &Playerctl) -> Result<MediaSnapshot> {
    let raw_length = playerctl.run(&["metadata", "mpris:length"])?;
    let length_micros = raw_length
        .parse::<u64>()
        .map_err(|e| StatlineError::parse(format!("track length {:?}: {}", raw_length, e)))?;

    Ok(MediaSnapshot {
        art_url: playerctl.text(&["metadata", "mpris:artUrl"]),
        title: playerctl.text(&["metadata", "xesam:title"]),
        artist: playerctl.text(&["metadata", "xesam:artist"]),
        album: playerctl.text(&["metadata", "xesam:album"]),
        album_artist: playerctl.text(&["metadata", "xesam:albumArtist"]),
        length_micros,
    })
}

/// Query playback state. Volume must parse, or the whole state is left at its
/// default. Players that cannot report a position read as 0.
pub fn query_player_state(playerctl: &Playerctl) -> PlayerState {
    try_query_player_state(playerctl).unwrap_or_else(|e| {
        log::debug!("player state unavailable: {}", e);
        PlayerState::default()
    })
}

fn try_query_player_state(playerctl: &Playerctl) -> Result<PlayerState> {
    let position_secs = playerctl
        .text(&["position"])
        .parse::<f64>()
        .unwrap_or_default();
    let volume = parse_float(&playerctl.text(&["volume"]), "volume")?;

    Ok(PlayerState {
        playing: playerctl.text(&["status"]) == "Playing",
        position_secs,
        volume,
        loop_mode: playerctl.text(&["loop"]),
        shuffle: playerctl.text(&["shuffle"]) == "On",
    })
}

fn parse_float(raw: &str, what: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|e| StatlineError::parse(format!("{} {:?}: {}", what, raw, e)))
}
