//! Source adapters.
//!
//! Each adapter queries one external subsystem and returns its snapshot.
//! Adapters never fail: any error is logged at debug level and collapses to
//! the snapshot's default value, so one broken source never blanks the others.

mod audio;
mod battery;
mod clock;
mod media;

pub use audio::query_audio;
pub use battery::query_battery;
pub use clock::query_clock;
pub use media::{query_metadata, query_player_state, Playerctl};
