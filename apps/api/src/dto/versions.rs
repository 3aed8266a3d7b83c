use essensys_domain::CatalogVersion;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::common::format_timestamp;
use super::entries::EntryResponse;

/// Incoming payload for version creation.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/create-version-request.ts"
)]
pub struct CreateVersionRequest {
    pub name: Option<String>,
}

/// Incoming payload for version cloning.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/clone-version-request.ts"
)]
pub struct CloneVersionRequest {
    pub name: Option<String>,
}

/// Incoming payload for status changes.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/set-version-status-request.ts"
)]
pub struct SetVersionStatusRequest {
    pub status: String,
    #[serde(default)]
    pub expected_updated_at: Option<String>,
}

/// API representation of a version without its entries.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/version-summary-response.ts"
)]
pub struct VersionSummaryResponse {
    pub version_id: String,
    pub name: String,
    pub status: String,
    pub status_label: String,
    pub created_at: String,
    pub updated_at: String,
    pub entry_count: usize,
}

/// API representation of a version and its ordered entries.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/version-response.ts"
)]
pub struct VersionResponse {
    pub version_id: String,
    pub name: String,
    pub status: String,
    pub status_label: String,
    pub created_at: String,
    pub updated_at: String,
    pub entries: Vec<EntryResponse>,
}

impl From<&CatalogVersion> for VersionSummaryResponse {
    fn from(value: &CatalogVersion) -> Self {
        Self {
            version_id: value.id().to_string(),
            name: value.name().to_owned(),
            status: value.status().as_str().to_owned(),
            status_label: value.status().label().to_owned(),
            created_at: format_timestamp(value.created_at()),
            updated_at: format_timestamp(value.updated_at()),
            entry_count: value.entries().len(),
        }
    }
}

impl From<CatalogVersion> for VersionResponse {
    fn from(value: CatalogVersion) -> Self {
        Self {
            version_id: value.id().to_string(),
            name: value.name().to_owned(),
            status: value.status().as_str().to_owned(),
            status_label: value.status().label().to_owned(),
            created_at: format_timestamp(value.created_at()),
            updated_at: format_timestamp(value.updated_at()),
            entries: value.entries().iter().map(EntryResponse::from).collect(),
        }
    }
}
