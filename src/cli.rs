use clap::{Parser, ValueEnum};

/// Tallies printed after the charts are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// Print nothing (default)
    #[default]
    None,
    /// Human-readable table
    Text,
    /// JSON object
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "bibstats")]
#[command(
    author,
    version,
    about = "Chart publication years and entry types of a BibTeX bibliography"
)]
#[command(long_about = "Reads bib.bib from the directory containing the executable and writes \
    bibstatsyear.svg (papers per year) and bibstatstype.svg (papers per category) next to it.\n\n\
    Exit codes:\n  \
    0 - Charts written\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Skip loading bibstats.toml
    #[arg(long)]
    pub no_config: bool,

    /// Print the tallies after rendering
    #[arg(long, value_enum, default_value = "none")]
    pub summary: SummaryFormat,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
