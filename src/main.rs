use anyhow::Result;

use statline::cli::build_cli;
use statline::commands;

fn main() -> Result<()> {
    statline::init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    if matches.get_flag("tokens") {
        return commands::tokens();
    }

    commands::run(&matches)
}
