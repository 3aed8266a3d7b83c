use crate::CatalogEntry;

/// Normalized free-text catalog query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: Option<String>,
}

impl SearchQuery {
    /// Normalizes a raw query: trimmed, lower-cased, blank means "everything".
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        Self {
            needle: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
        }
    }

    /// Returns the lower-cased needle, or `None` for a blank query.
    #[must_use]
    pub fn needle(&self) -> Option<&str> {
        self.needle.as_deref()
    }

    /// Returns whether the query selects every entry.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.needle.is_none()
    }
}

/// Filters entries by query, preserving their order. No ranking.
#[must_use]
pub fn filter_entries(entries: &[CatalogEntry], query: &SearchQuery) -> Vec<CatalogEntry> {
    if query.is_blank() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| entry.matches(query))
        .cloned()
        .collect()
}
