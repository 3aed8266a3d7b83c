use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use essensys_application::{
    AddEntryInput, AuditTrailQuery, CloneVersionInput, DeleteEntryInput, SetVersionStatusInput,
    UpdateEntryInput,
};
use essensys_domain::{AuditAction, EntryId, VersionId, VersionStatus};

use crate::dto::{
    AuditEventResponse, CloneVersionRequest, CreateVersionRequest, DeleteEntryRequest,
    EntryDeletionResponse, EntryResponse, HealthResponse, SaveEntryRequest,
    SetVersionStatusRequest, VersionResponse, VersionSummaryResponse, parse_expected_updated_at,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod audit;
mod entries;
mod health;
mod versions;

pub use audit::list_audit_trail_handler;
pub use entries::{
    add_entry_handler, delete_entry_handler, search_entries_handler, update_entry_handler,
};
pub use health::health_handler;
pub use versions::{
    clone_version_handler, create_version_handler, find_version_handler, list_versions_handler,
    select_version_handler, selected_version_handler, set_version_status_handler,
};

#[cfg(test)]
mod tests;
