use essensys_application::CatalogService;
use essensys_core::Actor;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
    pub actor: Actor,
}
