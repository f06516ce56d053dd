//! The poll loop: collect, render, emit, sleep.
//!
//! Everything runs on the calling thread. A hung `playerctl` or `pactl`
//! stalls the whole loop since external queries have no timeout.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::core::collector::SnapshotCollector;
use crate::core::snapshot::Snapshots;
use crate::error::Result;
use crate::ui::template::render_snapshots;

// Longest stretch the loop sleeps before re-checking for cancellation.
const CANCEL_CHECK_SLICE: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Rendered template, one line per tick
    #[default]
    Template,
    /// Raw snapshot bundle as one JSON object per line (for scripting)
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollConfig {
    pub template: String,
    pub interval: Duration,
    pub mode: OutputMode,
    /// Stop after the first line
    pub once: bool,
}

pub struct Poller {
    collector: SnapshotCollector,
    config: PollConfig,
}

impl Poller {
    pub fn new(collector: SnapshotCollector, config: PollConfig) -> Self {
        Self { collector, config }
    }

    /// Produce one output line from fresh snapshots.
    pub fn tick(&self) -> Result<String> {
        let snapshots = self.collector.collect();
        self.format_line(&snapshots)
    }

    fn format_line(&self, snapshots: &Snapshots) -> Result<String> {
        match self.config.mode {
            OutputMode::Template => Ok(render_snapshots(&self.config.template, snapshots)),
            OutputMode::Json => Ok(serde_json::to_string(snapshots)?),
        }
    }

    /// Emit a line per tick until `cancel` is raised (or after one line with `once`).
    ///
    /// Source failures never end the loop; only a failing writer does.
    pub fn run<W: Write>(&self, out: &mut W, cancel: &AtomicBool) -> Result<u64> {
        let mut ticks = 0u64;

        loop {
            let line = self.tick()?;
            writeln!(out, "{}", line)?;
            out.flush()?;
            ticks += 1;

            if self.config.once || cancel.load(Ordering::Relaxed) {
                break;
            }

            sleep_unless_cancelled(self.config.interval, cancel);

            if cancel.load(Ordering::Relaxed) {
                break;
            }
        }

        log::info!("poll loop stopped after {} tick(s)", ticks);
        Ok(ticks)
    }
}

fn sleep_unless_cancelled(duration: Duration, cancel: &AtomicBool) {
    let deadline = Instant::now() + duration;

    loop {
        if cancel.load(Ordering::Relaxed) {
            return;
        }

        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return;
        }

        thread::sleep(remaining.min(CANCEL_CHECK_SLICE));
    }
}
