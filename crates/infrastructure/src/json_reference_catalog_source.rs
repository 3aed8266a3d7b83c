use std::path::PathBuf;

use async_trait::async_trait;
use essensys_application::ReferenceCatalogSource;
use essensys_core::{AppError, AppResult};
use essensys_domain::ReferenceCatalog;
use tracing::info;

/// Reference table read from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonReferenceCatalogSource {
    path: PathBuf,
}

impl JsonReferenceCatalogSource {
    /// Creates a source reading the provided path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ReferenceCatalogSource for JsonReferenceCatalogSource {
    async fn load_reference_catalog(&self) -> AppResult<ReferenceCatalog> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|error| {
                AppError::Internal(format!(
                    "failed to read reference catalog '{}': {error}",
                    self.path.display()
                ))
            })?;

        let catalog = ReferenceCatalog::from_json_str(raw.as_str())?;
        info!(
            path = %self.path.display(),
            source = catalog.source.as_deref().unwrap_or("unknown"),
            entry_count = catalog.entries.len(),
            "loaded reference catalog"
        );

        Ok(catalog)
    }
}
