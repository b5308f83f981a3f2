//! Logger setup. Everything goes to stderr; stdout is reserved for the JSON
//! fragment the scheduler reads back.

use env_logger::fmt::TimestampPrecision;
use env_logger::{Builder, Env, Target};

/// Initialize the global logger. `RUST_LOG` overrides the level chosen here.
pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Stderr)
        .format_timestamp(verbose.then_some(TimestampPrecision::Millis))
        .format_target(verbose)
        .init();
}
