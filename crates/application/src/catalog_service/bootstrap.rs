use super::*;

/// Name given to the version seeded from the reference table.
pub const SEEDED_VERSION_NAME: &str = "Version 1";

impl CatalogService {
    /// Seeds the first version from the reference table and selects it.
    ///
    /// Runs once at startup on an empty store and emits no audit event.
    pub async fn bootstrap_from_reference(
        &self,
        reference: ReferenceCatalog,
    ) -> AppResult<CatalogVersion> {
        if self.repository.count_versions().await? > 0 {
            return Err(AppError::Conflict(
                "catalog already holds versions; reference seeding runs only once".to_owned(),
            ));
        }

        let entries = reference.into_entries(self.entry_defaults);
        let version = CatalogVersion::new(VersionId::new(), SEEDED_VERSION_NAME, self.clock.now())?
            .with_entries(entries);

        self.repository.insert_version(version.clone()).await?;
        self.repository.select_version(version.id()).await?;

        Ok(version)
    }
}
