use std::path::PathBuf;

use crate::core::config::DEFAULT_BATTERY;
use crate::core::snapshot::Snapshots;
use crate::core::sources::{
    query_audio, query_battery, query_clock, query_metadata, query_player_state, Playerctl,
};
use crate::platform::{ProcessRunner, SystemRunner, POWER_SUPPLY_ROOT};

/// Configuration for snapshot collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Power-supply entry to read, e.g. `BAT1`
    pub battery: String,
    /// Restrict `playerctl` to one MPRIS player
    pub player: Option<String>,
    pub power_supply_root: PathBuf,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            battery: DEFAULT_BATTERY.to_string(),
            player: None,
            power_supply_root: PathBuf::from(POWER_SUPPLY_ROOT),
        }
    }
}

/// Queries every source adapter, one after another.
pub struct SnapshotCollector {
    runner: Box<dyn ProcessRunner>,
    config: CollectorConfig,
}

impl SnapshotCollector {
    /// Create a collector that talks to the real system
    pub fn new(config: CollectorConfig) -> Self {
        Self::with_runner(Box::new(SystemRunner), config)
    }

    /// Create a collector with a custom process runner
    pub fn with_runner(runner: Box<dyn ProcessRunner>, config: CollectorConfig) -> Self {
        Self { runner, config }
    }

    /// Take a fresh snapshot of every source.
    ///
    /// Never fails: unavailable sources come back as their default values.
    pub fn collect(&self) -> Snapshots {
        let runner = self.runner.as_ref();
        let playerctl = Playerctl::new(runner, self.config.player.as_deref());

        let media = query_metadata(&playerctl);
        let player = query_player_state(&playerctl);
        let battery = query_battery(&self.config.power_supply_root, &self.config.battery);
        let audio = query_audio(runner);
        let clock = query_clock();

        Snapshots {
            timestamp: chrono::Utc::now().timestamp(),
            media,
            player,
            battery,
            audio,
            clock,
        }
    }
}
