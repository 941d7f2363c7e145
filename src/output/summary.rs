use std::fmt::Write;

use serde::Serialize;

use crate::classifier::{CategoryCounts, Classification};
use crate::error::Result;

use super::charts::YearCounts;

/// Renders the tallies behind the two charts for stdout.
pub trait SummaryFormatter {
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, classification: &Classification) -> Result<String>;
}

/// Plain-text tallies, one line per year and category.
pub struct TextSummary;

impl SummaryFormatter for TextSummary {
    fn format(&self, classification: &Classification) -> Result<String> {
        let years = YearCounts::from_years(&classification.years);
        let mut output = String::new();

        let _ = writeln!(output, "Entries: {}", classification.total_entries);
        let _ = writeln!(
            output,
            "Categorized: {}",
            classification.categories.total()
        );

        output.push_str("\nPapers per year:\n");
        if years.is_empty() {
            output.push_str("  (none)\n");
        }
        let width = years.iter().map(|(year, _)| year.len()).max().unwrap_or(0);
        for (year, count) in years.iter() {
            let _ = writeln!(output, "  {year:<width$}  {count}");
        }

        output.push_str("\nPapers by category:\n");
        let width = classification
            .categories
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);
        for (label, count) in classification.categories.iter() {
            let _ = writeln!(output, "  {label:<width$}  {count}");
        }

        Ok(output)
    }
}

/// Pretty-printed JSON object.
pub struct JsonSummary;

#[derive(Serialize)]
struct JsonOutput<'a> {
    total_entries: usize,
    categorized: usize,
    years: YearCounts,
    categories: &'a CategoryCounts,
}

impl SummaryFormatter for JsonSummary {
    fn format(&self, classification: &Classification) -> Result<String> {
        let output = JsonOutput {
            total_entries: classification.total_entries,
            categorized: classification.categories.total(),
            years: YearCounts::from_years(&classification.years),
            categories: &classification.categories,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
