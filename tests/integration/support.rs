// Shared fixtures for integration tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use statline::platform::ProcessRunner;
use statline::{Result, StatlineError};
use tempfile::TempDir;

/// Scripted stand-in for `playerctl` / `pactl`.
///
/// Unknown command lines fail like a non-zero exit. Every call is recorded.
#[derive(Default)]
pub struct FakeRunner {
    responses: HashMap<String, String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, command_line: &str, stdout: &str) -> Self {
        self.responses
            .insert(command_line.to_string(), stdout.to_string());
        self
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let command_line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.borrow_mut().push(command_line.clone());

        self.responses
            .get(&command_line)
            .cloned()
            .ok_or_else(|| StatlineError::command_failed(program, "exit status: 1"))
    }
}

/// A `playerctl` that knows everything about one track.
pub fn playing_track() -> FakeRunner {
    FakeRunner::new()
        .respond("playerctl metadata mpris:length", "245000000")
        .respond("playerctl metadata mpris:artUrl", "file:///covers/dummy.jpg")
        .respond("playerctl metadata xesam:title", "Teardrop")
        .respond("playerctl metadata xesam:artist", "Massive Attack")
        .respond("playerctl metadata xesam:album", "Mezzanine")
        .respond("playerctl metadata xesam:albumArtist", "Massive Attack")
        .respond("playerctl position", "125.5")
        .respond("playerctl volume", "0.8")
        .respond("playerctl status", "Playing")
        .respond("playerctl loop", "None")
        .respond("playerctl shuffle", "Off")
}

/// Adds pactl answers for the default sink.
pub fn with_mixer(runner: FakeRunner, muted: bool, percent: &str) -> FakeRunner {
    let volume = format!(
        r#"{{"volume":{{"front-left":{{"value":32768,"value_percent":"{0}","db":"-18.06 dB"}},"front-right":{{"value":32768,"value_percent":"{0}","db":"-18.06 dB"}}}},"balance":0.00}}"#,
        percent
    );

    runner
        .respond(
            "pactl -f json get-sink-mute @DEFAULT_SINK@",
            &format!(r#"{{"mute":{}}}"#, muted),
        )
        .respond("pactl -f json get-sink-volume @DEFAULT_SINK@", &volume)
}

/// Fake power-supply tree with one battery.
pub fn power_supply(battery: &str, capacity: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_capacity(temp_dir.path(), battery, capacity);
    temp_dir
}

pub fn write_capacity(root: &Path, battery: &str, capacity: &str) {
    let dir = root.join(battery);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("capacity"), capacity).unwrap();
}
