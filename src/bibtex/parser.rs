//! Conversion from `biblatex` output into the crate's entry model.

use biblatex::{Bibliography, ChunksExt, ParseError};

use super::model::{Database, Entry};
use crate::error::{BibStatsError, Result};

/// Parse BibTeX source text.
///
/// `@string` abbreviations and the month names `jan`..`dec` are expanded; an
/// abbreviation that was never defined is a parse error.
pub fn parse_source(source: &str) -> Result<Database> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let bibliography = Bibliography::parse(source).map_err(|e| to_parse_error(source, &e))?;

    let entries = bibliography
        .iter()
        .map(|raw| {
            let mut entry = Entry::new(raw.entry_type.to_string(), raw.key.clone());
            for (name, chunks) in &raw.fields {
                entry.insert(name, normalize_whitespace(&chunks.format_verbatim()));
            }
            entry
        })
        .collect();

    Ok(Database::new(entries))
}

fn to_parse_error(source: &str, error: &ParseError) -> BibStatsError {
    let (line, column) = line_column(source, error.span.start);
    BibStatsError::Parse {
        line,
        column,
        message: error.kind.to_string(),
    }
}

/// 1-based line and column of a byte offset.
fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let mut end = offset.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    let before = &source[..end];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
