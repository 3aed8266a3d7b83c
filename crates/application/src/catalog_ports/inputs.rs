use chrono::{DateTime, Utc};
use essensys_domain::{CatalogEntry, EntryFields, EntryId, VersionId, VersionStatus};

/// Input payload for version cloning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneVersionInput {
    /// Version whose entries are copied.
    pub source_version_id: VersionId,
    /// Optional name; defaults to `Copie de {source}`.
    pub name: Option<String>,
}

/// Input payload for status changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetVersionStatusInput {
    /// Target version.
    pub version_id: VersionId,
    /// New status.
    pub status: VersionStatus,
    /// Optional optimistic concurrency precondition.
    pub expected_updated_at: Option<DateTime<Utc>>,
}

/// Input payload for entry creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEntryInput {
    /// Owning version.
    pub version_id: VersionId,
    /// Entry fields.
    pub fields: EntryFields,
    /// Optional optimistic concurrency precondition.
    pub expected_updated_at: Option<DateTime<Utc>>,
}

/// Input payload for entry edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEntryInput {
    /// Owning version.
    pub version_id: VersionId,
    /// Edited entry.
    pub entry_id: EntryId,
    /// Replacement fields.
    pub fields: EntryFields,
    /// Optional optimistic concurrency precondition.
    pub expected_updated_at: Option<DateTime<Utc>>,
}

/// Input payload for entry deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteEntryInput {
    /// Owning version.
    pub version_id: VersionId,
    /// Entry to remove.
    pub entry_id: EntryId,
    /// Operator confirmation. `false` records a cancelled deletion.
    pub confirmed: bool,
    /// Optional optimistic concurrency precondition.
    pub expected_updated_at: Option<DateTime<Utc>>,
}

/// Result of a deletion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryDeletionOutcome {
    /// The operator declined; the entry is still present.
    Cancelled(CatalogEntry),
    /// The entry was removed.
    Deleted(CatalogEntry),
}

impl EntryDeletionOutcome {
    /// Returns the entry the attempt targeted.
    #[must_use]
    pub fn entry(&self) -> &CatalogEntry {
        match self {
            Self::Cancelled(entry) | Self::Deleted(entry) => entry,
        }
    }

    /// Returns whether the entry was removed.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted(_))
    }
}
