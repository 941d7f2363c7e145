use indexmap::IndexMap;

/// A single `@type{key, ...}` record.
///
/// Entry types and field names are stored lowercase so lookups are
/// case-insensitive regardless of how the file spells them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    entry_type: String,
    key: String,
    fields: IndexMap<String, String>,
}

impl Entry {
    #[must_use]
    pub fn new(entry_type: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into().to_ascii_lowercase(),
            key: key.into(),
            fields: IndexMap::new(),
        }
    }

    /// Add a field. A repeated name replaces the earlier value in place.
    #[must_use]
    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_ascii_lowercase(), value.into());
    }

    #[must_use]
    pub fn entry_type(&self) -> &str {
        &self.entry_type
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The `year` field exactly as written, if present.
    #[must_use]
    pub fn year(&self) -> Option<&str> {
        self.get("year")
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parsed bibliography: the entries in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Database {
    entries: Vec<Entry>,
}

impl Database {
    #[must_use]
    pub const fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
