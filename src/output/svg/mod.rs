//! SVG chart generation primitives.
//!
//! Charts are written as standalone documents:
//! - explicit `width`/`height` plus a `viewBox` so they scale when embedded
//! - a single `font-family` on the root element, taken from the process-wide [`ChartTheme`]
//! - coordinates rounded to two decimals so output is byte-stable across runs

mod builder;
mod chart;
mod data;
mod element;
mod format;
mod style;

pub use builder::SvgBuilder;
pub use chart::{BarChart, Margins, nice_scale, ticks};
pub use data::DataPoint;
pub use element::{Axis, AxisOrientation, Bar, GridLines, Label, SvgElement};
pub use format::{format_coord, format_count, xml_escape};
pub use style::{
    ChartColor, ChartTheme, DEFAULT_FONT_FAMILY, TextAnchor, ThemeCell, init_theme, theme,
};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
