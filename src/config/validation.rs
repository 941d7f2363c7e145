//! Configuration semantic validation.
//!
//! Runs after parsing: range checks on chart sizes and color syntax.

use crate::config::Config;
use crate::output::svg::ChartColor;
use crate::{BibStatsError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a chart size is not a positive finite number, a color
/// is malformed, `category_chart.colors` is empty, or the font family is blank.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    if config.style.font_family.trim().is_empty() {
        return Err(BibStatsError::Config(
            "style.font_family cannot be empty".to_string(),
        ));
    }

    validate_size(
        "year_chart",
        config.year_chart.width,
        config.year_chart.height,
    )?;
    validate_color("year_chart.bar_color", &config.year_chart.bar_color)?;

    validate_size(
        "category_chart",
        config.category_chart.width,
        config.category_chart.height,
    )?;
    if config.category_chart.colors.is_empty() {
        return Err(BibStatsError::Config(
            "category_chart.colors must contain at least one color".to_string(),
        ));
    }
    for (i, color) in config.category_chart.colors.iter().enumerate() {
        validate_color(&format!("category_chart.colors[{i}]"), color)?;
    }

    Ok(())
}

fn validate_size(section: &str, width: f64, height: f64) -> Result<()> {
    for (name, value) in [("width", width), ("height", height)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(BibStatsError::Config(format!(
                "{section}.{name} must be a positive number, got {value}"
            )));
        }
    }
    Ok(())
}

fn validate_color(field: &str, value: &str) -> Result<()> {
    if ChartColor::parse(value).is_valid() {
        Ok(())
    } else {
        Err(BibStatsError::Config(format!(
            "{field}: invalid color '{value}' (expected #rgb, #rrggbb, or a color name)"
        )))
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
