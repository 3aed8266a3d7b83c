use async_trait::async_trait;
use chrono::{DateTime, Utc};
use essensys_core::AppResult;
use essensys_domain::{CatalogVersion, VersionId};

/// Repository port for catalog versions and the selected-version pointer.
///
/// Versions are stored and returned as owned snapshots; writes replace a
/// version wholesale.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Stores a new version ahead of the existing ones.
    async fn insert_version(&self, version: CatalogVersion) -> AppResult<()>;

    /// Replaces a stored version if its `updated_at` still equals `expected_updated_at`.
    async fn replace_version(
        &self,
        version: CatalogVersion,
        expected_updated_at: DateTime<Utc>,
    ) -> AppResult<()>;

    /// Looks up a version by identifier.
    async fn find_version(&self, version_id: VersionId) -> AppResult<Option<CatalogVersion>>;

    /// Lists versions, most recently created first.
    async fn list_versions(&self) -> AppResult<Vec<CatalogVersion>>;

    /// Returns how many versions exist.
    async fn count_versions(&self) -> AppResult<usize>;

    /// Returns the selected version identifier, if any.
    async fn selected_version_id(&self) -> AppResult<Option<VersionId>>;

    /// Selects an existing version.
    async fn select_version(&self, version_id: VersionId) -> AppResult<()>;
}
