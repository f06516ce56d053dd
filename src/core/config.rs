use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_FORMAT: &str = "@t:h@:@t:m@:@t:s@ @p:a@ - @p:t@";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_BATTERY: &str = "BAT1";

/// Settings read from `<config dir>/statline/config.json`.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: Option<String>,
    pub poll_interval_ms: Option<u64>,
    pub battery: Option<String>,
    pub player: Option<String>,
}

/// Values given on the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub format: Option<String>,
    pub poll_interval_ms: Option<u64>,
    pub battery: Option<String>,
    pub player: Option<String>,
}

/// Effective settings after merging defaults, config file and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub format: String,
    pub poll_interval: Duration,
    pub battery: String,
    pub player: Option<String>,
}

impl Config {
    /// Load from the default location, or defaults if there is none.
    pub fn load() -> Result<Self> {
        match Self::get_config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => Ok(Config::default()),
        }
    }

    /// Load from an explicit path. A missing or empty file yields the defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("statline").join("config.json"))
    }

    /// Merge with command-line overrides. Flags win over the file, the file
    /// wins over built-in defaults.
    pub fn resolve(&self, overrides: Overrides) -> Settings {
        let interval_ms = overrides
            .poll_interval_ms
            .or(self.poll_interval_ms)
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS);

        Settings {
            format: overrides
                .format
                .or_else(|| self.format.clone())
                .unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
            poll_interval: Duration::from_millis(interval_ms),
            battery: overrides
                .battery
                .or_else(|| self.battery.clone())
                .unwrap_or_else(|| DEFAULT_BATTERY.to_string()),
            player: overrides.player.or_else(|| self.player.clone()),
        }
    }
}
