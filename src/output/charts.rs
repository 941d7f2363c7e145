//! The two bibliography charts: papers per year and papers per category.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::classifier::CategoryCounts;
use crate::config::{CategoryChartConfig, YearChartConfig};
use crate::error::{BibStatsError, Result};

use super::svg::{BarChart, DataPoint, Margins, SvgElement};

/// Output file for the year histogram.
pub const YEAR_CHART_FILE: &str = "bibstatsyear.svg";

/// Output file for the category distribution.
pub const CATEGORY_CHART_FILE: &str = "bibstatstype.svg";

const Y_LABEL: &str = "Number of Papers";
const YEAR_LABEL_ROTATION: f64 = 45.0;
const CATEGORY_BAR_WIDTH: f64 = 0.3;

/// Occurrences per distinct year, ordered by the year string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct YearCounts {
    counts: BTreeMap<String, usize>,
}

impl YearCounts {
    #[must_use]
    pub fn from_years<S: AsRef<str>>(years: &[S]) -> Self {
        let mut counts = BTreeMap::new();
        for year in years {
            *counts.entry(year.as_ref().to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    #[must_use]
    pub fn get(&self, year: &str) -> usize {
        self.counts.get(year).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(year, count)| (year.as_str(), *count))
    }
}

/// SVG text of the papers-per-year histogram.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn year_chart_svg<S: AsRef<str>>(years: &[S], config: &YearChartConfig) -> String {
    let data = YearCounts::from_years(years)
        .iter()
        .map(|(year, count)| DataPoint::new(year, count as f64))
        .collect();

    BarChart::new("Papers per Year", data)
        .with_size(config.width, config.height)
        .with_margins(Margins {
            bottom: 52.0,
            ..Margins::default()
        })
        .with_color(config.color())
        .with_axis_labels("Year", Y_LABEL)
        .with_label_rotation(YEAR_LABEL_ROTATION)
        .render()
}

/// SVG text of the category distribution, bars in stored order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn category_chart_svg(categories: &CategoryCounts, config: &CategoryChartConfig) -> String {
    let data = categories
        .iter()
        .enumerate()
        .map(|(i, (label, count))| {
            DataPoint::new(label, count as f64).with_color(config.color_at(i))
        })
        .collect();

    BarChart::new("Papers by Category", data)
        .with_size(config.width, config.height)
        .with_bar_width(CATEGORY_BAR_WIDTH)
        .with_axis_labels("Category", Y_LABEL)
        .render()
}

/// Write the year histogram to `out_path`, replacing any existing file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn render_year_histogram<S: AsRef<str>>(
    years: &[S],
    out_path: &Path,
    config: &YearChartConfig,
) -> Result<()> {
    write_chart(out_path, &year_chart_svg(years, config))
}

/// Write the category distribution to `out_path`, replacing any existing file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn render_category_distribution(
    categories: &CategoryCounts,
    out_path: &Path,
    config: &CategoryChartConfig,
) -> Result<()> {
    write_chart(out_path, &category_chart_svg(categories, config))
}

fn write_chart(out_path: &Path, svg: &str) -> Result<()> {
    fs::write(out_path, svg).map_err(|source| BibStatsError::FileWrite {
        path: out_path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %out_path.display(), "wrote chart");
    Ok(())
}

#[cfg(test)]
#[path = "charts_tests.rs"]
mod tests;
