use async_trait::async_trait;
use essensys_core::AppResult;
use essensys_domain::ReferenceCatalog;

/// Port for the static reference table used to seed the first version.
#[async_trait]
pub trait ReferenceCatalogSource: Send + Sync {
    /// Loads and parses the reference table.
    async fn load_reference_catalog(&self) -> AppResult<ReferenceCatalog>;
}
