use std::sync::Arc;

use chrono::{DateTime, Utc};
use essensys_core::{Actor, AppError, AppResult};
use essensys_domain::{
    AuditAction, AuditEvent, CatalogEntry, CatalogVersion, EntryDefaults, EntryId,
    ReferenceCatalog, SearchQuery, VersionId,
};

use crate::catalog_ports::{
    AddEntryInput, AuditTrailQuery, AuditTrailRepository, CatalogRepository, Clock,
    CloneVersionInput, DeleteEntryInput, EntryDeletionOutcome, SetVersionStatusInput,
    UpdateEntryInput,
};

mod audit_trail;
mod bootstrap;
mod entries;
mod versions;

pub use bootstrap::SEEDED_VERSION_NAME;

/// Application service owning catalog versions, entries and their audit trail.
///
/// Every mutation loads an owned snapshot of the target version, derives the
/// next value, writes it back with a compare-and-swap on `updated_at` and then
/// appends exactly one audit event.
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
    audit_repository: Arc<dyn AuditTrailRepository>,
    clock: Arc<dyn Clock>,
    entry_defaults: EntryDefaults,
}

impl CatalogService {
    /// Creates a new catalog service from port implementations.
    #[must_use]
    pub fn new(
        repository: Arc<dyn CatalogRepository>,
        audit_repository: Arc<dyn AuditTrailRepository>,
        clock: Arc<dyn Clock>,
        entry_defaults: EntryDefaults,
    ) -> Self {
        Self {
            repository,
            audit_repository,
            clock,
            entry_defaults,
        }
    }

    /// Returns the flag defaults applied to new entries.
    #[must_use]
    pub fn entry_defaults(&self) -> EntryDefaults {
        self.entry_defaults
    }

    async fn require_version(&self, version_id: VersionId) -> AppResult<CatalogVersion> {
        self.repository
            .find_version(version_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("version '{version_id}' does not exist")))
    }

    async fn commit_version(
        &self,
        version: CatalogVersion,
        expected_updated_at: DateTime<Utc>,
    ) -> AppResult<()> {
        self.repository
            .replace_version(version, expected_updated_at)
            .await
    }

    async fn record(&self, actor: &Actor, action: AuditAction, details: String) -> AppResult<()> {
        self.audit_repository
            .append_event(AuditEvent::new(action, details, actor, self.clock.now()))
            .await
    }
}

fn require_fresh(
    version: &CatalogVersion,
    expected_updated_at: Option<DateTime<Utc>>,
) -> AppResult<()> {
    match expected_updated_at {
        Some(expected) if expected != version.updated_at() => Err(AppError::Conflict(format!(
            "version '{}' was modified at {} after the expected {}",
            version.id(),
            version.updated_at().to_rfc3339(),
            expected.to_rfc3339()
        ))),
        _ => Ok(()),
    }
}

fn entry_details(entry: &CatalogEntry) -> String {
    format!("{}.", entry.summary())
}
