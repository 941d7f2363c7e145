//! One complete run: config, theme, classification, both charts.

use crate::classifier::{Classification, classify_file};
use crate::cli::SummaryFormat;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;
use crate::output::svg::init_theme;
use crate::output::{
    JsonSummary, SummaryFormatter, TextSummary, render_category_distribution,
    render_year_histogram,
};
use crate::paths::ProgramPaths;

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub no_config: bool,
    pub summary: SummaryFormat,
}

/// Classify the bibliography and write both charts.
///
/// Returns the formatted summary when one was requested.
///
/// # Errors
/// Returns an error if the configuration is invalid or a chart cannot be
/// written. An unreadable bibliography is not an error.
pub fn run(paths: &ProgramPaths, options: &RunOptions) -> Result<Option<String>> {
    let config = load_config(paths, options.no_config)?;

    if !init_theme(config.style.theme()) {
        tracing::debug!("chart theme already installed, keeping it");
    }

    let classification = classify_file(&paths.bibliography);
    tracing::debug!(
        entries = classification.total_entries,
        years = classification.years.len(),
        "classified bibliography"
    );

    render_year_histogram(&classification.years, &paths.year_chart, &config.year_chart)?;
    render_category_distribution(
        &classification.categories,
        &paths.category_chart,
        &config.category_chart,
    )?;

    format_summary(&classification, options.summary)
}

fn load_config(paths: &ProgramPaths, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    FileConfigLoader::new().load_from_dir(&paths.dir)
}

fn format_summary(
    classification: &Classification,
    format: SummaryFormat,
) -> Result<Option<String>> {
    match format {
        SummaryFormat::None => Ok(None),
        SummaryFormat::Text => TextSummary.format(classification).map(Some),
        SummaryFormat::Json => JsonSummary.format(classification).map(Some),
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
