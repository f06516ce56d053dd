use chrono::Local;

use crate::core::snapshot::ClockSnapshot;

/// Local wall-clock time, right now.
pub fn query_clock() -> ClockSnapshot {
    ClockSnapshot::from_time(&Local::now())
}
