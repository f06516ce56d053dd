// Linux power-supply class (sysfs) access

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::platform::process::trim_newline;

/// Where the kernel exposes batteries and AC adapters.
pub const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

/// Path of the `capacity` attribute for `battery` under `root`.
pub fn capacity_path(root: &Path, battery: &str) -> PathBuf {
    root.join(battery).join("capacity")
}

/// Read the raw capacity attribute, without its trailing newline.
pub fn read_capacity(root: &Path, battery: &str) -> Result<String> {
    let raw = fs::read_to_string(capacity_path(root, battery))?;
    Ok(trim_newline(&raw).to_string())
}
