//! Essensys catalog API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod dto;
mod error;
mod handlers;
mod state;

use std::sync::Arc;

use essensys_application::{CatalogService, ReferenceCatalogSource};
use essensys_core::AppError;
use essensys_domain::ReferenceCatalog;
use essensys_infrastructure::{
    InMemoryAuditTrailRepository, InMemoryCatalogRepository, JsonReferenceCatalogSource,
    SystemClock,
};
use tracing::info;

use crate::api_config::{ApiConfig, init_tracing};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;
    let app_state = build_app_state(&config).await?;
    let app = api_router::build_router(app_state, &config.frontend_url)?;

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "essensys-api listening");

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}

async fn build_app_state(config: &ApiConfig) -> Result<AppState, AppError> {
    let reference = match &config.reference_path {
        Some(path) => Some(
            JsonReferenceCatalogSource::new(path.clone())
                .load_reference_catalog()
                .await?,
        ),
        None => None,
    };

    let entry_defaults = reference
        .as_ref()
        .unwrap_or(&ReferenceCatalog::default())
        .resolved_defaults(config.entry_default_overrides);

    let catalog_service = CatalogService::new(
        Arc::new(InMemoryCatalogRepository::new()),
        Arc::new(InMemoryAuditTrailRepository::new()),
        Arc::new(SystemClock),
        entry_defaults,
    );

    if let Some(reference) = reference {
        let version = catalog_service.bootstrap_from_reference(reference).await?;
        info!(
            version_id = %version.id(),
            entry_count = version.entries().len(),
            "seeded catalog from reference table"
        );
    }

    Ok(AppState {
        catalog_service,
        actor: config.audit_actor.clone(),
    })
}
