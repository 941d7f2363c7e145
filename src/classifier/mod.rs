//! Record classification: publication years and entry-type categories.

mod category;

use std::path::Path;

use serde::Serialize;

pub use category::{Category, CategoryCounts};

use crate::bibtex::{self, Database};
use crate::error::Result;

/// Years and category counts extracted from one bibliography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// `year` values in file order, duplicates kept, unconverted.
    pub years: Vec<String>,
    pub categories: CategoryCounts,
    /// Number of entries read, whether or not they were categorized.
    pub total_entries: usize,
}

impl Classification {
    /// Result used when the bibliography cannot be read or parsed.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            years: Vec::new(),
            categories: CategoryCounts::fallback(),
            total_entries: 0,
        }
    }
}

/// Classify already parsed entries.
#[must_use]
pub fn classify(database: &Database) -> Classification {
    let mut years = Vec::new();
    let mut categories = CategoryCounts::new();

    for entry in database.entries() {
        if let Some(year) = entry.year() {
            years.push(year.to_string());
        }

        if let Some(category) = Category::from_entry_type(entry.entry_type()) {
            categories.increment(category);
        }
    }

    Classification {
        years,
        categories,
        total_entries: database.len(),
    }
}

/// Parse and classify BibTeX source text.
///
/// # Errors
/// Returns an error if the source is malformed.
pub fn classify_source(source: &str) -> Result<Classification> {
    Ok(classify(&bibtex::parse(source)?))
}

/// Read, parse, and classify a bibliography file.
///
/// # Errors
/// Returns an error if the file cannot be read, is not UTF-8, or is malformed.
pub fn try_classify_file(path: &Path) -> Result<Classification> {
    let database = bibtex::parse_file(path)?;
    tracing::debug!(
        path = %path.display(),
        entries = database.len(),
        "parsed bibliography"
    );
    Ok(classify(&database))
}

/// Classify a bibliography file, never failing.
///
/// Any read or parse error is logged and replaced with
/// [`Classification::fallback`] so that chart rendering can still run.
#[must_use]
pub fn classify_file(path: &Path) -> Classification {
    match try_classify_file(path) {
        Ok(classification) => classification,
        Err(e) => {
            tracing::error!(kind = e.error_type(), "Error parsing .bib file: {}", e.message());
            Classification::fallback()
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
