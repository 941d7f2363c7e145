use serde::{Deserialize, Serialize};

use crate::output::svg::{ChartColor, ChartTheme, DEFAULT_FONT_FAMILY};

/// Chart styling loaded from `bibstats.toml`.
///
/// Every section is optional; a missing file or section means defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub year_chart: YearChartConfig,

    #[serde(default)]
    pub category_chart: CategoryChartConfig,
}

/// Process-wide typography.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Font family for every chart (default: "Times New Roman").
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
        }
    }
}

impl StyleConfig {
    /// Theme to install once at startup.
    #[must_use]
    pub fn theme(&self) -> ChartTheme {
        ChartTheme::default().with_font_family(self.font_family.clone())
    }
}

/// Papers-per-year histogram.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct YearChartConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    /// Fill for every bar (hex or CSS keyword).
    #[serde(default = "default_year_color")]
    pub bar_color: String,
}

impl Default for YearChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            bar_color: default_year_color(),
        }
    }
}

impl YearChartConfig {
    #[must_use]
    pub fn color(&self) -> ChartColor {
        ChartColor::parse(&self.bar_color)
    }
}

/// Category distribution chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CategoryChartConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    /// Fills assigned to bars by position, cycling if there are more bars than colors.
    #[serde(default = "default_category_colors")]
    pub colors: Vec<String>,
}

impl Default for CategoryChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            colors: default_category_colors(),
        }
    }
}

impl CategoryChartConfig {
    /// Color for the bar at `index`.
    #[must_use]
    pub fn color_at(&self, index: usize) -> ChartColor {
        if self.colors.is_empty() {
            return ChartColor::parse(&default_year_color());
        }
        ChartColor::parse(&self.colors[index % self.colors.len()])
    }
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

const fn default_width() -> f64 {
    400.0
}

const fn default_height() -> f64 {
    300.0
}

fn default_year_color() -> String {
    "#0000ff".to_string()
}

fn default_category_colors() -> Vec<String> {
    vec![
        "#0000ff".to_string(),
        "#008000".to_string(),
        "#ff0000".to_string(),
    ]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
