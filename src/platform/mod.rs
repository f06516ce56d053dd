// Platform-specific code module

pub mod power_supply;
pub mod process;

// Re-exports for cleaner imports
pub use power_supply::{capacity_path, read_capacity, POWER_SUPPLY_ROOT};
pub use process::{trim_newline, ProcessRunner, SystemRunner};
