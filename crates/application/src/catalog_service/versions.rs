use super::*;

impl CatalogService {
    /// Creates an empty draft version and selects it.
    ///
    /// A blank or missing name defaults to `Version {n}` where `n` is the
    /// number of existing versions plus one.
    pub async fn create_version(
        &self,
        actor: &Actor,
        name: Option<String>,
    ) -> AppResult<CatalogVersion> {
        let name = match name.filter(|name| !name.trim().is_empty()) {
            Some(name) => name,
            None => format!("Version {}", self.repository.count_versions().await? + 1),
        };

        let version = CatalogVersion::new(VersionId::new(), name, self.clock.now())?;
        self.repository.insert_version(version.clone()).await?;
        self.repository.select_version(version.id()).await?;

        self.record(
            actor,
            AuditAction::VersionCreated,
            format!("Creation de {}.", version.name()),
        )
        .await?;

        Ok(version)
    }

    /// Clones a version into a new draft with fresh entry identities and selects it.
    pub async fn clone_version(
        &self,
        actor: &Actor,
        input: CloneVersionInput,
    ) -> AppResult<CatalogVersion> {
        let source = self.require_version(input.source_version_id).await?;
        let name = input
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("Copie de {}", source.name()));

        let cloned = source.duplicate(VersionId::new(), name, self.clock.now())?;
        self.repository.insert_version(cloned.clone()).await?;
        self.repository.select_version(cloned.id()).await?;

        self.record(
            actor,
            AuditAction::VersionCloned,
            format!("Clone de {} vers {}.", source.name(), cloned.name()),
        )
        .await?;

        Ok(cloned)
    }

    /// Marks an existing version as the selected one.
    pub async fn select_version(&self, version_id: VersionId) -> AppResult<CatalogVersion> {
        let version = self.require_version(version_id).await?;
        self.repository.select_version(version_id).await?;
        Ok(version)
    }

    /// Returns the selected version, if any.
    pub async fn selected_version(&self) -> AppResult<Option<CatalogVersion>> {
        let Some(version_id) = self.repository.selected_version_id().await? else {
            return Ok(None);
        };

        self.repository.find_version(version_id).await
    }

    /// Returns one version by identifier.
    pub async fn find_version(&self, version_id: VersionId) -> AppResult<CatalogVersion> {
        self.require_version(version_id).await
    }

    /// Lists every version, most recently created first.
    pub async fn list_versions(&self) -> AppResult<Vec<CatalogVersion>> {
        self.repository.list_versions().await
    }

    /// Overwrites a version status. Any status may follow any other.
    pub async fn set_status(
        &self,
        actor: &Actor,
        input: SetVersionStatusInput,
    ) -> AppResult<CatalogVersion> {
        let current = self.require_version(input.version_id).await?;
        require_fresh(&current, input.expected_updated_at)?;

        let previous_updated_at = current.updated_at();
        let updated = current.with_status(input.status, self.clock.now());
        self.commit_version(updated.clone(), previous_updated_at)
            .await?;

        self.record(
            actor,
            AuditAction::VersionStatusChanged,
            format!("Statut de {}: {}.", updated.name(), updated.status().as_str()),
        )
        .await?;

        Ok(updated)
    }
}
