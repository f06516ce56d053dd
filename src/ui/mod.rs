// UI and formatting module

pub mod formatters;
pub mod template;

// Re-export commonly used items for cleaner imports
pub use formatters::format_time;
pub use template::{render, render_snapshots, Token, TokenSpec, TOKENS};
