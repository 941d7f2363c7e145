use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Publication category derived from a BibTeX entry type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Conference,
    Journal,
    Arxiv,
}

impl Category {
    /// Chart order.
    pub const ALL: [Self; 3] = [Self::Conference, Self::Journal, Self::Arxiv];

    /// Map an entry type (any case) to its category.
    ///
    /// Only `article`, `inproceedings` and `misc` are categorized; every other
    /// type returns `None`.
    #[must_use]
    pub fn from_entry_type(entry_type: &str) -> Option<Self> {
        match entry_type.to_ascii_lowercase().as_str() {
            "article" => Some(Self::Journal),
            "inproceedings" => Some(Self::Conference),
            "misc" => Some(Self::Arxiv),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Conference => "Conference",
            Self::Journal => "Journal",
            Self::Arxiv => "Arxiv",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Labelled per-category counters, kept in insertion order.
///
/// A successful classification labels the counters `Conference`, `Journal`,
/// `Arxiv`. The zero-valued fallback returned when a bibliography cannot be
/// read uses lowercase labels instead; renderers draw whatever labels are
/// stored. [`CategoryCounts::get`] ignores label case and works on both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryCounts {
    counts: IndexMap<String, usize>,
}

impl CategoryCounts {
    /// All three categories at zero, with capitalized labels.
    #[must_use]
    pub fn new() -> Self {
        Self::with_labels(Category::ALL.map(Category::label))
    }

    /// Zero-valued mapping produced when classification fails.
    #[must_use]
    pub fn fallback() -> Self {
        Self::with_labels(["conference", "journal", "arxiv"])
    }

    fn with_labels(labels: [&str; 3]) -> Self {
        Self {
            counts: labels.iter().map(|label| ((*label).to_string(), 0)).collect(),
        }
    }

    pub fn increment(&mut self, category: Category) {
        if let Some(count) = self.slot_mut(category) {
            *count += 1;
        }
    }

    #[must_use]
    pub fn get(&self, category: Category) -> usize {
        self.counts
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case(category.label()))
            .map_or(0, |(_, count)| *count)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Labels and counts in chart order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }

    fn slot_mut(&mut self, category: Category) -> Option<&mut usize> {
        self.counts
            .iter_mut()
            .find(|(label, _)| label.eq_ignore_ascii_case(category.label()))
            .map(|(_, count)| count)
    }
}

impl Default for CategoryCounts {
    fn default() -> Self {
        Self::new()
    }
}
