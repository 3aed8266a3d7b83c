use super::*;

impl CatalogService {
    /// Adds an entry at the head of a version's entry list.
    pub async fn add_entry(&self, actor: &Actor, input: AddEntryInput) -> AppResult<CatalogEntry> {
        let current = self.require_version(input.version_id).await?;
        require_fresh(&current, input.expected_updated_at)?;

        let entry = CatalogEntry::new(EntryId::new(), input.fields, self.entry_defaults)?;
        let previous_updated_at = current.updated_at();
        let updated = current.with_entry_prepended(entry.clone(), self.clock.now());
        self.commit_version(updated, previous_updated_at).await?;

        self.record(actor, AuditAction::EntryAdded, entry_details(&entry))
            .await?;

        Ok(entry)
    }

    /// Replaces an entry's fields without moving it.
    pub async fn update_entry(
        &self,
        actor: &Actor,
        input: UpdateEntryInput,
    ) -> AppResult<CatalogEntry> {
        let current = self.require_version(input.version_id).await?;
        require_fresh(&current, input.expected_updated_at)?;

        let previous_updated_at = current.updated_at();
        let (updated, entry) =
            current.with_entry_replaced(input.entry_id, input.fields, self.clock.now())?;
        self.commit_version(updated, previous_updated_at).await?;

        self.record(actor, AuditAction::EntryUpdated, entry_details(&entry))
            .await?;

        Ok(entry)
    }

    /// Deletes an entry once confirmed; a declined confirmation is still audited.
    pub async fn delete_entry(
        &self,
        actor: &Actor,
        input: DeleteEntryInput,
    ) -> AppResult<EntryDeletionOutcome> {
        let current = self.require_version(input.version_id).await?;

        if !input.confirmed {
            let entry = current.require_entry(input.entry_id)?.clone();
            self.record(
                actor,
                AuditAction::EntryDeletionCancelled,
                entry_details(&entry),
            )
            .await?;

            return Ok(EntryDeletionOutcome::Cancelled(entry));
        }

        require_fresh(&current, input.expected_updated_at)?;

        let previous_updated_at = current.updated_at();
        let (updated, removed) = current.without_entry(input.entry_id, self.clock.now())?;
        self.commit_version(updated, previous_updated_at).await?;

        self.record(actor, AuditAction::EntryDeleted, entry_details(&removed))
            .await?;

        Ok(EntryDeletionOutcome::Deleted(removed))
    }

    /// Returns the version's entries matching a free-text query, in order.
    pub async fn search_entries(
        &self,
        version_id: VersionId,
        query: &str,
    ) -> AppResult<Vec<CatalogEntry>> {
        let version = self.require_version(version_id).await?;
        Ok(version.search(&SearchQuery::new(query)))
    }
}
