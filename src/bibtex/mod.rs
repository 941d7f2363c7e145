//! BibTeX reading on top of the `biblatex` crate.

mod model;
mod parser;

use std::path::Path;

pub use model::{Database, Entry};

use crate::error::{BibStatsError, Result};

/// Parse a BibTeX database from a string.
///
/// # Errors
/// Returns [`BibStatsError::Parse`] if the input is malformed or uses an
/// undefined `@string` abbreviation.
pub fn parse(input: &str) -> Result<Database> {
    parser::parse_source(input)
}

/// Read and parse a BibTeX file. The file must be valid UTF-8.
///
/// # Errors
/// Returns [`BibStatsError::FileRead`] if the file cannot be read or decoded,
/// or [`BibStatsError::Parse`] if its content is malformed.
pub fn parse_file(path: &Path) -> Result<Database> {
    let content = std::fs::read_to_string(path).map_err(|source| BibStatsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
