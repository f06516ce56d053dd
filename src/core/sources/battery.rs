//! Battery adapter, reading the power-supply capacity attribute.

use std::path::Path;

use crate::core::snapshot::BatterySnapshot;
use crate::error::{Result, StatlineError};
use crate::platform::read_capacity;

/// Read the charge of `battery` (e.g. `"BAT1"`) under the power-supply `root`.
///
/// A missing battery and a flat one both read as 0%.
pub fn query_battery(root: &Path, battery: &str) -> BatterySnapshot {
    try_query_battery(root, battery).unwrap_or_else(|e| {
        log::debug!("battery {} unavailable: {}", battery, e);
        BatterySnapshot::default()
    })
}

fn try_query_battery(root: &Path, battery: &str) -> Result<BatterySnapshot> {
    let raw = read_capacity(root, battery)?;
    let capacity_percent = raw
        .parse::<i64>()
        .map_err(|e| StatlineError::parse(format!("capacity {:?}: {}", raw, e)))?;

    Ok(BatterySnapshot { capacity_percent })
}
