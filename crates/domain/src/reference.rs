use essensys_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::{CatalogEntry, EntryDefaults, EntryFields, EntryId};

const FALLBACK_CATEGORY: &str = "Autres";
const NULL_MARKER: &str = "NULL";

/// Optional flag defaults declared by a reference table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntryDefaults {
    /// Default web flag.
    #[serde(default)]
    pub web: Option<bool>,
    /// Default local flag.
    #[serde(default)]
    pub local: Option<bool>,
}

/// One raw row of the reference table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceRecord {
    /// Category; blank rows fall back to `Autres`.
    pub categorie: Option<String>,
    /// Zone.
    pub zone: Option<String>,
    /// Room; the literal `NULL` means none.
    pub piece: Option<String>,
    /// Action; the literal `NULL` means none.
    pub action: Option<String>,
    /// Configuration key.
    pub keys: Option<String>,
    /// Configuration value.
    pub value: Option<String>,
    /// Free attribute.
    pub attribute: Option<String>,
    /// Short description.
    pub short_description: Option<String>,
    /// Long description.
    pub long_description: Option<String>,
    /// Optional web flag.
    pub web: Option<bool>,
    /// Optional local flag.
    pub local: Option<bool>,
}

impl ReferenceRecord {
    /// Normalizes the row into entry fields.
    #[must_use]
    pub fn into_fields(self) -> EntryFields {
        let categorie = self
            .categorie
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_owned());

        EntryFields {
            categorie,
            zone: self.zone.unwrap_or_default(),
            piece: without_null_marker(self.piece),
            action: without_null_marker(self.action),
            keys: self.keys.unwrap_or_default(),
            value: self.value.unwrap_or_default(),
            attribute: self.attribute.unwrap_or_default(),
            short_description: self.short_description.unwrap_or_default(),
            long_description: self.long_description.unwrap_or_default(),
            web: self.web,
            local: self.local,
        }
    }
}

fn without_null_marker(value: Option<String>) -> String {
    value
        .filter(|value| value.trim() != NULL_MARKER)
        .unwrap_or_default()
}

/// Static reference table consumed once to seed the initial version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceCatalog {
    /// Label of the upstream document the table was extracted from.
    pub source: Option<String>,
    /// Flag defaults for rows that omit them.
    pub entry_defaults: ReferenceEntryDefaults,
    /// Ordered rows.
    pub entries: Vec<ReferenceRecord>,
}

impl ReferenceCatalog {
    /// Parses a reference table from JSON text.
    pub fn from_json_str(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw)
            .map_err(|error| AppError::Validation(format!("invalid reference catalog: {error}")))
    }

    /// Resolves entry defaults, letting explicit overrides win over the table.
    #[must_use]
    pub fn resolved_defaults(&self, overrides: ReferenceEntryDefaults) -> EntryDefaults {
        let fallback = EntryDefaults::default();
        EntryDefaults {
            web: overrides
                .web
                .or(self.entry_defaults.web)
                .unwrap_or(fallback.web),
            local: overrides
                .local
                .or(self.entry_defaults.local)
                .unwrap_or(fallback.local),
        }
    }

    /// Builds seeded entries in table order, each with a fresh identity.
    #[must_use]
    pub fn into_entries(self, defaults: EntryDefaults) -> Vec<CatalogEntry> {
        self.entries
            .into_iter()
            .map(|record| CatalogEntry::from_reference(EntryId::new(), record.into_fields(), defaults))
            .collect()
    }
}
