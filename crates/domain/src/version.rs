use chrono::{DateTime, Duration, Utc};
use essensys_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::search::{SearchQuery, filter_entries};
use crate::{CatalogEntry, EntryFields, EntryId, VersionId, VersionStatus};

/// Named, independently lifecycle-tracked snapshot of catalog entries.
///
/// Mutators consume the value and return the next one so that callers
/// holding an earlier copy keep a consistent snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogVersion {
    id: VersionId,
    name: NonEmptyString,
    status: VersionStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    entries: Vec<CatalogEntry>,
}

impl CatalogVersion {
    /// Creates an empty draft version.
    pub fn new(id: VersionId, name: impl Into<String>, now: DateTime<Utc>) -> AppResult<Self> {
        let name: String = name.into();
        let name = NonEmptyString::new(name.trim())
            .map_err(|_| AppError::Validation("version name must not be empty".to_owned()))?;

        Ok(Self {
            id,
            name,
            status: VersionStatus::Draft,
            created_at: now,
            updated_at: now,
            entries: Vec::new(),
        })
    }

    /// Replaces the entry list wholesale. Used when seeding.
    #[must_use]
    pub fn with_entries(mut self, entries: Vec<CatalogEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Deep-copies this version into a new draft with fresh entry identities.
    pub fn duplicate(
        &self,
        id: VersionId,
        name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        let entries = self.entries.iter().map(CatalogEntry::duplicate).collect();
        Ok(Self::new(id, name, now)?.with_entries(entries))
    }

    /// Prepends an entry: the most recently added entry comes first.
    #[must_use]
    pub fn with_entry_prepended(mut self, entry: CatalogEntry, now: DateTime<Utc>) -> Self {
        self.entries.insert(0, entry);
        self.touch(now);
        self
    }

    /// Replaces an entry's fields in place, keeping its position.
    pub fn with_entry_replaced(
        mut self,
        entry_id: EntryId,
        fields: EntryFields,
        now: DateTime<Utc>,
    ) -> AppResult<(Self, CatalogEntry)> {
        let position = self.entry_position(entry_id)?;
        let replacement = self.entries[position].replaced_with(fields)?;

        self.entries[position] = replacement.clone();
        self.touch(now);
        Ok((self, replacement))
    }

    /// Removes an entry and returns it alongside the next version value.
    pub fn without_entry(
        mut self,
        entry_id: EntryId,
        now: DateTime<Utc>,
    ) -> AppResult<(Self, CatalogEntry)> {
        let position = self.entry_position(entry_id)?;
        let removed = self.entries.remove(position);

        self.touch(now);
        Ok((self, removed))
    }

    /// Overwrites the status. Transitions are unrestricted.
    #[must_use]
    pub fn with_status(mut self, status: VersionStatus, now: DateTime<Utc>) -> Self {
        self.status = status;
        self.touch(now);
        self
    }

    /// Returns entries matching the query in their current order.
    #[must_use]
    pub fn search(&self, query: &SearchQuery) -> Vec<CatalogEntry> {
        filter_entries(&self.entries, query)
    }

    /// Looks up an entry by identifier.
    #[must_use]
    pub fn find_entry(&self, entry_id: EntryId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id() == entry_id)
    }

    /// Looks up an entry, failing with `NotFound` when absent.
    pub fn require_entry(&self, entry_id: EntryId) -> AppResult<&CatalogEntry> {
        self.find_entry(entry_id).ok_or_else(|| self.missing_entry(entry_id))
    }

    fn entry_position(&self, entry_id: EntryId) -> AppResult<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id() == entry_id)
            .ok_or_else(|| self.missing_entry(entry_id))
    }

    fn missing_entry(&self, entry_id: EntryId) -> AppError {
        AppError::NotFound(format!(
            "entry '{entry_id}' does not exist in version '{}'",
            self.id
        ))
    }

    // Clock readings may repeat or step back; updated_at still advances so
    // that it can serve as a compare-and-swap token.
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }

    /// Returns the version identifier.
    #[must_use]
    pub fn id(&self) -> VersionId {
        self.id
    }

    /// Returns the version name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub fn status(&self) -> VersionStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last modification timestamp.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns entries, most recently added first.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}
