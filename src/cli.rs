use clap::{Arg, ArgAction, Command};

use crate::core::config::{DEFAULT_BATTERY, DEFAULT_FORMAT, DEFAULT_POLL_INTERVAL_MS};

/// Command-line definition.
///
/// Flags carry no clap defaults so that values from the config file can fill
/// the gaps; the effective defaults live in [`crate::core::config`].
pub fn build_cli() -> Command {
    Command::new("statline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print a templated status line (media, battery, audio, clock) on an interval")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("TEMPLATE")
                .help(format!(
                    "Output template [default: \"{}\"] (see --tokens)",
                    DEFAULT_FORMAT
                )),
        )
        .arg(
            Arg::new("poll")
                .short('p')
                .long("poll")
                .value_name("MILLISECONDS")
                .help(format!(
                    "Time in ms between each poll [default: {}]",
                    DEFAULT_POLL_INTERVAL_MS
                ))
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("battery")
                .short('b')
                .long("battery")
                .value_name("ID")
                .help(format!(
                    "Power-supply entry to read capacity from [default: {}]",
                    DEFAULT_BATTERY
                )),
        )
        .arg(
            Arg::new("player")
                .long("player")
                .value_name("NAME")
                .help("Only query this MPRIS player (passed to playerctl --player)"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Config file to use instead of <config dir>/statline/config.json"),
        )
        .arg(
            Arg::new("once")
                .short('o')
                .long("once")
                .help("Print a single line and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print each tick's raw snapshots as JSON instead of the template")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("List the template tokens and exit")
                .action(ArgAction::SetTrue),
        )
}
