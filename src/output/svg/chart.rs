//! Vertical bar chart rendered as a standalone SVG document.

use super::builder::SvgBuilder;
use super::data::DataPoint;
use super::element::{Axis, Bar, GridLines, Label, SvgElement};
use super::format::{format_coord, format_count};
use super::style::{ChartColor, ChartTheme, theme};

/// Space reserved around the plot area for ticks and axis titles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 12.0,
            right: 12.0,
            bottom: 40.0,
            left: 52.0,
        }
    }
}

/// Vertical bar chart with a zero-based count axis.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub data: Vec<DataPoint>,
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub bar_color: ChartColor,
    pub bar_opacity: f64,
    /// Bar width as a fraction of the slot each category gets.
    pub bar_width: f64,
    pub x_label: String,
    pub y_label: String,
    /// Counter-clockwise rotation of category labels in degrees.
    pub label_rotation: f64,
    pub show_grid: bool,
    pub theme: ChartTheme,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            data: Vec::new(),
            width: 400.0,
            height: 300.0,
            margins: Margins::default(),
            bar_color: ChartColor::hex("#0000ff"),
            bar_opacity: 0.7,
            bar_width: 0.8,
            x_label: String::new(),
            y_label: String::new(),
            label_rotation: 0.0,
            show_grid: true,
            theme: ChartTheme::default(),
        }
    }
}

impl BarChart {
    /// New chart styled with the process-wide theme.
    #[must_use]
    pub fn new(title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            title: title.into(),
            data,
            theme: theme().clone(),
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub const fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.bar_color = color;
        self
    }

    #[must_use]
    pub const fn with_bar_width(mut self, fraction: f64) -> Self {
        self.bar_width = fraction;
        self
    }

    #[must_use]
    pub fn with_axis_labels(
        mut self,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    #[must_use]
    pub const fn with_label_rotation(mut self, degrees: f64) -> Self {
        self.label_rotation = degrees;
        self
    }

    #[must_use]
    pub const fn with_grid(mut self, show: bool) -> Self {
        self.show_grid = show;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    fn plot_area(&self) -> (f64, f64, f64, f64) {
        let left = self.margins.left;
        let top = self.margins.top;
        let width = (self.width - self.margins.left - self.margins.right).max(1.0);
        let height = (self.height - self.margins.top - self.margins.bottom).max(1.0);
        (left, top, width, height)
    }

    #[allow(clippy::cast_precision_loss)]
    fn bars(&self, left: f64, bottom: f64, width: f64, height: f64, axis_max: f64) -> Vec<Bar> {
        let slot = width / self.data.len().max(1) as f64;
        let bar_width = slot * self.bar_width;

        self.data
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let bar_height = (point.value / axis_max) * height;
                Bar {
                    x: slot.mul_add(i as f64, left) + (slot - bar_width) / 2.0,
                    y: bottom - bar_height,
                    width: bar_width,
                    height: bar_height,
                    color: point
                        .color
                        .clone()
                        .unwrap_or_else(|| self.bar_color.clone()),
                    opacity: self.bar_opacity,
                    label: point.label.clone(),
                    value: point.value,
                }
            })
            .collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn category_labels(&self) -> Vec<(f64, String)> {
        let count = self.data.len() as f64;
        self.data
            .iter()
            .enumerate()
            .map(|(i, point)| ((i as f64 + 0.5) / count, point.label.clone()))
            .collect()
    }
}

/// Axis maximum and tick step for a zero-based count axis.
///
/// Steps are 1, 2 or 5 times a power of ten and never below 1, so every tick
/// is a whole number.
#[must_use]
pub fn nice_scale(max_value: f64) -> (f64, f64) {
    let max_value = max_value.max(1.0);
    let raw_step = max_value / 5.0;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = (nice * magnitude).max(1.0);
    ((max_value / step).ceil() * step, step)
}

/// Tick values from zero to `axis_max` inclusive.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn ticks(axis_max: f64, step: f64) -> Vec<f64> {
    let count = (axis_max / step).round() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

impl SvgElement for BarChart {
    fn render(&self) -> String {
        let (left, top, plot_width, plot_height) = self.plot_area();
        let bottom = top + plot_height;

        let max_value = self.data.iter().map(|d| d.value).fold(0.0_f64, f64::max);
        let (axis_max, step) = nice_scale(max_value);
        let tick_values = ticks(axis_max, step);

        let theme = &self.theme;
        let mut builder = SvgBuilder::new(self.width, self.height)
            .with_title(self.title.clone())
            .with_font_family(theme.font_family.clone())
            .with_background("white");

        if self.show_grid {
            let grid = GridLines {
                x: left,
                width: plot_width,
                positions: tick_values
                    .iter()
                    .skip(1)
                    .map(|v| bottom - v / axis_max * plot_height)
                    .collect(),
                color: theme.grid_color.clone(),
                opacity: 0.7,
            };
            builder = builder.push_element(&grid);
        }

        for bar in self.bars(left, bottom, plot_width, plot_height, axis_max) {
            builder = builder.push_element(&bar);
        }

        if self.data.is_empty() {
            let (x, y) = (left + plot_width / 2.0, top + plot_height / 2.0);
            let message = Label::new(x, y, "No data available")
                .with_color(theme.grid_color.clone())
                .with_font_size(theme.font_size);
            builder = builder.push_element(&message);
        }

        // Frame around the plot area
        builder = builder.push_raw(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="0.8"/>"#,
            format_coord(left),
            format_coord(top),
            format_coord(plot_width),
            format_coord(plot_height),
            theme.axis_color.to_css()
        ));

        let y_axis = Axis::vertical(left, bottom, plot_height)
            .with_color(theme.axis_color.clone())
            .with_font_size(theme.font_size)
            .with_labels(
                tick_values
                    .iter()
                    .map(|v| (v / axis_max, format_count(*v)))
                    .collect(),
            );
        let x_axis = Axis::horizontal(left, bottom, plot_width)
            .with_color(theme.axis_color.clone())
            .with_font_size(theme.font_size)
            .with_label_rotation(self.label_rotation)
            .with_labels(self.category_labels());
        builder = builder.push_element(&y_axis).push_element(&x_axis);

        let title_size = theme.font_size + 1.0;
        if !self.x_label.is_empty() {
            let x = left + plot_width / 2.0;
            let x_title = Label::new(x, self.height - 4.0, self.x_label.clone())
                .with_color(theme.text_color.clone())
                .with_font_size(title_size);
            builder = builder.push_element(&x_title);
        }
        if !self.y_label.is_empty() {
            let y = top + plot_height / 2.0;
            let y_title = Label::new(title_size + 2.0, y, self.y_label.clone())
                .with_color(theme.text_color.clone())
                .with_font_size(title_size)
                .with_rotation(90.0);
            builder = builder.push_element(&y_title);
        }

        builder.build()
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
