//! Log output setup.
//!
//! Verbosity comes only from the command line; no environment variable is read.

use std::io::IsTerminal;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter directive for the given flags. `quiet` wins over `verbose`.
#[must_use]
pub fn filter_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "bibstats=error";
    }
    match verbose {
        0 => "bibstats=info",
        1 => "bibstats=debug",
        _ => "bibstats=trace",
    }
}

/// Install the global subscriber, writing to stdout.
///
/// Does nothing if a subscriber is already installed.
pub fn init(verbose: u8, quiet: bool) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directive(verbose, quiet)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stdout().is_terminal())
                .with_writer(std::io::stdout),
        )
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
