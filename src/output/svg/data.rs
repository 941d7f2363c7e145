//! Chart data model.

use super::style::ChartColor;

/// A single bar's worth of data.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    /// Category label drawn under the bar
    pub label: String,
    pub value: f64,
    /// Overrides the chart's bar color
    pub color: Option<ChartColor>,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = Some(color);
        self
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
