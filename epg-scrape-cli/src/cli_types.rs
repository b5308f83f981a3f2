//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use epg_scrape_lib::Extractor;

#[derive(Parser)]
#[command(name = "epg-scrape")]
#[command(
    about = "Enrich an EPG event read from stdin with episode or movie metadata",
    long_about = None
)]
pub(crate) struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extractor to run on the event
    #[arg(long, value_enum, default_value_t = ExtractorArg::Auto)]
    pub extractor: ExtractorArg,

    /// Catalog request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExtractorArg {
    /// Movies to the catalog, everything else to the episode parser
    Auto,
    /// Parse season/episode numbering from the description
    Episode,
    /// Look the title up in the movie catalog
    Movie,
}

impl From<ExtractorArg> for Extractor {
    fn from(arg: ExtractorArg) -> Self {
        match arg {
            ExtractorArg::Auto => Extractor::Auto,
            ExtractorArg::Episode => Extractor::Episode,
            ExtractorArg::Movie => Extractor::Movie,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Inspect catalog configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and their sources
    Show,

    /// Print the config file path
    Path,
}
