use async_trait::async_trait;
use chrono::{DateTime, Utc};
use essensys_application::CatalogRepository;
use essensys_core::{AppError, AppResult};
use essensys_domain::{CatalogVersion, VersionId};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct CatalogState {
    versions: Vec<CatalogVersion>,
    selected: Option<VersionId>,
}

/// In-memory catalog repository.
///
/// Holds versions newest first. State is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryCatalogRepository {
    state: RwLock<CatalogState>,
}

impl InMemoryCatalogRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn insert_version(&self, version: CatalogVersion) -> AppResult<()> {
        let mut state = self.state.write().await;

        if state
            .versions
            .iter()
            .any(|stored| stored.id() == version.id())
        {
            return Err(AppError::Conflict(format!(
                "version '{}' already exists",
                version.id()
            )));
        }

        debug!(
            version_id = %version.id(),
            entry_count = version.entries().len(),
            "stored catalog version"
        );
        state.versions.insert(0, version);
        Ok(())
    }

    async fn replace_version(
        &self,
        version: CatalogVersion,
        expected_updated_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut state = self.state.write().await;
        let stored = state
            .versions
            .iter_mut()
            .find(|stored| stored.id() == version.id())
            .ok_or_else(|| {
                AppError::NotFound(format!("version '{}' does not exist", version.id()))
            })?;

        if stored.updated_at() != expected_updated_at {
            return Err(AppError::Conflict(format!(
                "version '{}' changed concurrently",
                version.id()
            )));
        }

        debug!(
            version_id = %version.id(),
            status = %version.status(),
            entry_count = version.entries().len(),
            "replaced catalog version"
        );
        *stored = version;
        Ok(())
    }

    async fn find_version(&self, version_id: VersionId) -> AppResult<Option<CatalogVersion>> {
        Ok(self
            .state
            .read()
            .await
            .versions
            .iter()
            .find(|version| version.id() == version_id)
            .cloned())
    }

    async fn list_versions(&self) -> AppResult<Vec<CatalogVersion>> {
        Ok(self.state.read().await.versions.clone())
    }

    async fn count_versions(&self) -> AppResult<usize> {
        Ok(self.state.read().await.versions.len())
    }

    async fn selected_version_id(&self) -> AppResult<Option<VersionId>> {
        Ok(self.state.read().await.selected)
    }

    async fn select_version(&self, version_id: VersionId) -> AppResult<()> {
        let mut state = self.state.write().await;

        if !state
            .versions
            .iter()
            .any(|version| version.id() == version_id)
        {
            return Err(AppError::NotFound(format!(
                "version '{version_id}' does not exist"
            )));
        }

        state.selected = Some(version_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
