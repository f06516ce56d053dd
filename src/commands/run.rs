//! Status line command handler.
//!
//! Resolves settings, wires the collector into the poll loop and prints to stdout.

use anyhow::{Context, Result};
use clap::ArgMatches;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::collector::{CollectorConfig, SnapshotCollector};
use crate::core::config::{Config, Overrides, Settings};
use crate::core::poller::{OutputMode, PollConfig, Poller};

/// Execute the status line loop
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => Config::load_from(Path::new(path)),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let settings = config.resolve(overrides_from(matches));
    let once = matches.get_flag("once");
    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Template
    };

    let poller = build_poller(settings, mode, once);

    // Setup Ctrl+C handler
    let cancel_flag = Arc::new(AtomicBool::new(false));
    if !once {
        let cancel_flag_clone = cancel_flag.clone();
        ctrlc::set_handler(move || {
            cancel_flag_clone.store(true, Ordering::Relaxed);
        })
        .map_err(|e| anyhow::anyhow!("Failed to set Ctrl+C handler: {}", e))?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    poller
        .run(&mut out, &cancel_flag)
        .context("Failed to write status line")?;

    Ok(())
}

/// Collect the command-line values that override the config file
pub fn overrides_from(matches: &ArgMatches) -> Overrides {
    Overrides {
        format: matches.get_one::<String>("format").cloned(),
        poll_interval_ms: matches.get_one::<u64>("poll").copied(),
        battery: matches.get_one::<String>("battery").cloned(),
        player: matches.get_one::<String>("player").cloned(),
    }
}

fn build_poller(settings: Settings, mode: OutputMode, once: bool) -> Poller {
    log::info!(
        "polling every {:?} (battery {}, player {})",
        settings.poll_interval,
        settings.battery,
        settings.player.as_deref().unwrap_or("any")
    );

    let collector = SnapshotCollector::new(CollectorConfig {
        battery: settings.battery,
        player: settings.player,
        ..Default::default()
    });

    Poller::new(
        collector,
        PollConfig {
            template: settings.format,
            interval: settings.poll_interval,
            mode,
            once,
        },
    )
}
