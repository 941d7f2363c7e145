//! Primitive SVG elements: axes, bars, grid lines, and labels.

use std::fmt::Write;

use super::format::{format_coord, format_count, xml_escape};
use super::style::{ChartColor, TextAnchor};

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Tick position and label for axis rendering.
struct TickInfo {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis line with ticks and tick labels.
///
/// Label positions are fractions of the axis length: `0.0` is the origin
/// and `1.0` the far end.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
    /// Counter-clockwise rotation of tick labels in degrees.
    pub label_rotation: f64,
}

impl Axis {
    #[must_use]
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Horizontal, x, y, length)
    }

    #[must_use]
    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Vertical, x, y, length)
    }

    fn new(orientation: AxisOrientation, x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation,
            x,
            y,
            length,
            labels: Vec::new(),
            color: ChartColor::hex("#000000"),
            tick_length: 3.5,
            font_size: 10.0,
            label_rotation: 0.0,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_label_rotation(mut self, degrees: f64) -> Self {
        self.label_rotation = degrees;
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tick_x = pos.mul_add(self.length, self.x);
                // Rotated labels hang from the tick by their end
                let anchor = if self.label_rotation == 0.0 {
                    TextAnchor::Middle
                } else {
                    TextAnchor::End
                };
                TickInfo {
                    start_x: tick_x,
                    start_y: self.y,
                    end_x: tick_x,
                    end_y: self.y + self.tick_length,
                    label_x: tick_x,
                    label_y: self.y + self.tick_length + self.font_size + 2.0,
                    anchor,
                }
            }
            AxisOrientation::Vertical => {
                let tick_y = pos.mul_add(-self.length, self.y);
                TickInfo {
                    start_x: self.x,
                    start_y: tick_y,
                    end_x: self.x - self.tick_length,
                    end_y: tick_y,
                    label_x: self.x - self.tick_length - 3.0,
                    label_y: tick_y + self.font_size / 3.0,
                    anchor: TextAnchor::End,
                }
            }
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();

        let (end_x, end_y) = match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y - self.length),
        };

        let _ = writeln!(
            output,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="0.8"/>"#,
            format_coord(self.x),
            format_coord(self.y),
            format_coord(end_x),
            format_coord(end_y)
        );

        for (pos, label) in &self.labels {
            let tick = self.calculate_tick(*pos);
            let label_x = format_coord(tick.label_x);
            let label_y = format_coord(tick.label_y);

            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="0.8"/>"#,
                format_coord(tick.start_x),
                format_coord(tick.start_y),
                format_coord(tick.end_x),
                format_coord(tick.end_y)
            );

            let transform = if self.label_rotation == 0.0 {
                String::new()
            } else {
                format!(
                    r#" transform="rotate({} {label_x} {label_y})""#,
                    format_coord(-self.label_rotation)
                )
            };

            let escaped_label = xml_escape(label);
            let _ = writeln!(
                output,
                r#"<text x="{label_x}" y="{label_y}" text-anchor="{}" fill="{color}" font-size="{}"{transform}>{escaped_label}</text>"#,
                tick.anchor,
                format_coord(self.font_size)
            );
        }

        output
    }
}

/// A single bar in a bar chart.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub opacity: f64,
    pub label: String,
    pub value: f64,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let escaped_label = xml_escape(&self.label);
        // Title gives viewers a hover tooltip
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}" fill-opacity="{}">
    <title>{escaped_label}: {}</title>
</rect>"#,
            format_coord(self.x),
            format_coord(self.y),
            format_coord(self.width),
            format_coord(self.height),
            format_coord(self.opacity),
            format_count(self.value)
        )
    }
}

/// Dashed horizontal reference lines across the plot area.
#[derive(Debug, Clone)]
pub struct GridLines {
    pub x: f64,
    pub width: f64,
    /// Y coordinates, one line each.
    pub positions: Vec<f64>,
    pub color: ChartColor,
    pub opacity: f64,
}

impl SvgElement for GridLines {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();
        let x1 = format_coord(self.x);
        let x2 = format_coord(self.x + self.width);

        for y in &self.positions {
            let y = format_coord(*y);
            let _ = writeln!(
                output,
                r#"<line x1="{x1}" y1="{y}" x2="{x2}" y2="{y}" stroke="{color}" stroke-opacity="{}" stroke-width="0.8" stroke-dasharray="3 2"/>"#,
                format_coord(self.opacity)
            );
        }

        output
    }
}

/// Free-standing text such as an axis title.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: ChartColor,
    pub font_size: f64,
    pub anchor: TextAnchor,
    /// Counter-clockwise rotation in degrees around (x, y).
    pub rotation: f64,
}

impl Label {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            color: ChartColor::hex("#000000"),
            font_size: 10.0,
            anchor: TextAnchor::Middle,
            rotation: 0.0,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        let x = format_coord(self.x);
        let y = format_coord(self.y);
        let transform = if self.rotation == 0.0 {
            String::new()
        } else {
            format!(
                r#" transform="rotate({} {x} {y})""#,
                format_coord(-self.rotation)
            )
        };

        format!(
            r#"<text x="{x}" y="{y}" text-anchor="{}" fill="{}" font-size="{}"{transform}>{}</text>"#,
            self.anchor,
            self.color.to_css(),
            format_coord(self.font_size),
            xml_escape(&self.text)
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
