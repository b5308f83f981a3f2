//! epg-scrape CLI
//!
//! Reads one EPG event as JSON on stdin and prints the enrichment, if any,
//! as one JSON line on stdout. Exits 0 whether or not anything was found,
//! 1 on bad input or configuration, and 2 when the movie catalog is
//! unavailable.

mod cli_types;
mod commands;
mod error;
mod logging;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    let config = cli.config.as_deref();
    let result = match cli.command {
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::run_config_show(config),
            ConfigAction::Path => commands::config::run_config_path(config),
        },
        None => commands::enrich::run_enrich(
            cli.extractor.into(),
            config,
            cli.timeout.map(Duration::from_secs),
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
