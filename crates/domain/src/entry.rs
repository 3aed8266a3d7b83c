use essensys_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::EntryId;
use crate::search::SearchQuery;

/// Default `web`/`local` flags applied when an entry payload omits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDefaults {
    /// Default for the web-exposure flag.
    pub web: bool,
    /// Default for the local-exposure flag.
    pub local: bool,
}

impl Default for EntryDefaults {
    fn default() -> Self {
        Self {
            web: true,
            local: true,
        }
    }
}

/// Editable field bag for catalog entry create/update operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryFields {
    /// Functional category (lighting, heating, ...).
    pub categorie: String,
    /// Zone of the installation.
    pub zone: String,
    /// Room inside the zone.
    pub piece: String,
    /// Action label.
    pub action: String,
    /// Configuration key.
    pub keys: String,
    /// Configuration value written to the key.
    pub value: String,
    /// Free attribute.
    pub attribute: String,
    /// Short human description.
    pub short_description: String,
    /// Long human description.
    pub long_description: String,
    /// Web exposure flag; `None` falls back to a default.
    pub web: Option<bool>,
    /// Local exposure flag; `None` falls back to a default.
    pub local: Option<bool>,
}

impl EntryFields {
    /// Returns a copy with every textual field trimmed.
    #[must_use]
    pub fn trimmed(self) -> Self {
        Self {
            categorie: self.categorie.trim().to_owned(),
            zone: self.zone.trim().to_owned(),
            piece: self.piece.trim().to_owned(),
            action: self.action.trim().to_owned(),
            keys: self.keys.trim().to_owned(),
            value: self.value.trim().to_owned(),
            attribute: self.attribute.trim().to_owned(),
            short_description: self.short_description.trim().to_owned(),
            long_description: self.long_description.trim().to_owned(),
            web: self.web,
            local: self.local,
        }
    }

    /// Rejects payloads whose required fields are blank.
    pub fn validate_required(&self) -> AppResult<()> {
        let required = [
            ("categorie", self.categorie.as_str()),
            ("zone", self.zone.as_str()),
            ("keys", self.keys.as_str()),
            ("value", self.value.as_str()),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter_map(|(name, value)| value.trim().is_empty().then_some(*name))
            .collect();

        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "entry fields must not be empty: {}",
                missing.join(", ")
            )));
        }

        Ok(())
    }
}

/// One catalog record describing a configurable action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    id: EntryId,
    categorie: String,
    zone: String,
    piece: String,
    action: String,
    keys: String,
    value: String,
    attribute: String,
    short_description: String,
    long_description: String,
    web: bool,
    local: bool,
}

impl CatalogEntry {
    /// Creates a validated entry from an operator payload.
    ///
    /// Text is trimmed, `categorie`/`zone`/`keys`/`value` are required and
    /// missing flags take `defaults`.
    pub fn new(id: EntryId, fields: EntryFields, defaults: EntryDefaults) -> AppResult<Self> {
        let fields = fields.trimmed();
        fields.validate_required()?;

        Ok(Self::from_trimmed(id, fields, defaults))
    }

    /// Creates an entry from bootstrap reference data.
    ///
    /// Reference rows are trimmed but not required-field validated.
    #[must_use]
    pub fn from_reference(id: EntryId, fields: EntryFields, defaults: EntryDefaults) -> Self {
        Self::from_trimmed(id, fields.trimmed(), defaults)
    }

    fn from_trimmed(id: EntryId, fields: EntryFields, defaults: EntryDefaults) -> Self {
        Self {
            id,
            categorie: fields.categorie,
            zone: fields.zone,
            piece: fields.piece,
            action: fields.action,
            keys: fields.keys,
            value: fields.value,
            attribute: fields.attribute,
            short_description: fields.short_description,
            long_description: fields.long_description,
            web: fields.web.unwrap_or(defaults.web),
            local: fields.local.unwrap_or(defaults.local),
        }
    }

    /// Returns a validated replacement keeping this entry's identity.
    ///
    /// Flags omitted from `fields` keep their current value.
    pub fn replaced_with(&self, fields: EntryFields) -> AppResult<Self> {
        let current = EntryDefaults {
            web: self.web,
            local: self.local,
        };

        Self::new(self.id, fields, current)
    }

    /// Returns a copy of this entry under a fresh identity.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            id: EntryId::new(),
            ..self.clone()
        }
    }

    /// Returns the audit summary `"{categorie} - {zone} (cle {keys})"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} - {} (cle {})", self.categorie, self.zone, self.keys)
    }

    /// Returns whether the query occurs in any textual field.
    #[must_use]
    pub fn matches(&self, query: &SearchQuery) -> bool {
        let Some(needle) = query.needle() else {
            return true;
        };

        self.haystack().contains(needle)
    }

    fn haystack(&self) -> String {
        [
            self.categorie.as_str(),
            self.zone.as_str(),
            self.piece.as_str(),
            self.action.as_str(),
            self.keys.as_str(),
            self.value.as_str(),
            self.attribute.as_str(),
            self.short_description.as_str(),
            self.long_description.as_str(),
        ]
        .into_iter()
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }

    /// Returns the entry identifier.
    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Returns the category.
    #[must_use]
    pub fn categorie(&self) -> &str {
        self.categorie.as_str()
    }

    /// Returns the zone.
    #[must_use]
    pub fn zone(&self) -> &str {
        self.zone.as_str()
    }

    /// Returns the room.
    #[must_use]
    pub fn piece(&self) -> &str {
        self.piece.as_str()
    }

    /// Returns the action label.
    #[must_use]
    pub fn action(&self) -> &str {
        self.action.as_str()
    }

    /// Returns the configuration key.
    #[must_use]
    pub fn keys(&self) -> &str {
        self.keys.as_str()
    }

    /// Returns the configuration value.
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Returns the free attribute.
    #[must_use]
    pub fn attribute(&self) -> &str {
        self.attribute.as_str()
    }

    /// Returns the short description.
    #[must_use]
    pub fn short_description(&self) -> &str {
        self.short_description.as_str()
    }

    /// Returns the long description.
    #[must_use]
    pub fn long_description(&self) -> &str {
        self.long_description.as_str()
    }

    /// Returns the web exposure flag.
    #[must_use]
    pub fn web(&self) -> bool {
        self.web
    }

    /// Returns the local exposure flag.
    #[must_use]
    pub fn local(&self) -> bool {
        self.local
    }
}
