use essensys_application::EntryDeletionOutcome;
use essensys_domain::{CatalogEntry, EntryFields};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for entry creation and edits.
///
/// Omitted flags fall back to the configured defaults on creation and keep
/// their current values on edits.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/save-entry-request.ts"
)]
pub struct SaveEntryRequest {
    pub categorie: String,
    pub zone: String,
    pub piece: String,
    pub action: String,
    pub keys: String,
    pub value: String,
    pub attribute: String,
    pub short_description: String,
    pub long_description: String,
    pub web: Option<bool>,
    pub local: Option<bool>,
    pub expected_updated_at: Option<String>,
}

impl SaveEntryRequest {
    /// Splits the payload into entry fields and the optional precondition.
    pub fn into_parts(self) -> (EntryFields, Option<String>) {
        (
            EntryFields {
                categorie: self.categorie,
                zone: self.zone,
                piece: self.piece,
                action: self.action,
                keys: self.keys,
                value: self.value,
                attribute: self.attribute,
                short_description: self.short_description,
                long_description: self.long_description,
                web: self.web,
                local: self.local,
            },
            self.expected_updated_at,
        )
    }
}

/// Incoming payload for entry deletion.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/delete-entry-request.ts"
)]
pub struct DeleteEntryRequest {
    pub confirmed: bool,
    #[serde(default)]
    pub expected_updated_at: Option<String>,
}

/// API representation of a catalog entry.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/entry-response.ts"
)]
pub struct EntryResponse {
    pub entry_id: String,
    pub categorie: String,
    pub zone: String,
    pub piece: String,
    pub action: String,
    pub keys: String,
    pub value: String,
    pub attribute: String,
    pub short_description: String,
    pub long_description: String,
    pub web: bool,
    pub local: bool,
}

/// Result of a deletion attempt.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/entry-deletion-response.ts"
)]
pub struct EntryDeletionResponse {
    pub deleted: bool,
    pub entry: EntryResponse,
}

impl From<&CatalogEntry> for EntryResponse {
    fn from(value: &CatalogEntry) -> Self {
        Self {
            entry_id: value.id().to_string(),
            categorie: value.categorie().to_owned(),
            zone: value.zone().to_owned(),
            piece: value.piece().to_owned(),
            action: value.action().to_owned(),
            keys: value.keys().to_owned(),
            value: value.value().to_owned(),
            attribute: value.attribute().to_owned(),
            short_description: value.short_description().to_owned(),
            long_description: value.long_description().to_owned(),
            web: value.web(),
            local: value.local(),
        }
    }
}

impl From<EntryDeletionOutcome> for EntryDeletionResponse {
    fn from(value: EntryDeletionOutcome) -> Self {
        Self {
            deleted: value.is_deleted(),
            entry: EntryResponse::from(value.entry()),
        }
    }
}
