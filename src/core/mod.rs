// Core business logic module

pub mod collector;
pub mod config;
pub mod poller;
pub mod snapshot;
pub mod sources;

// Re-export commonly used items
pub use collector::{CollectorConfig, SnapshotCollector};
pub use config::{Config, Overrides, Settings};
pub use poller::{OutputMode, PollConfig, Poller};
pub use snapshot::{
    AudioSnapshot, BatterySnapshot, ClockSnapshot, MediaSnapshot, PlayerState, Snapshots,
};
