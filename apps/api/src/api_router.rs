use axum::Router;
use axum::routing::{get, post, put};
use essensys_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let catalog_routes = Router::new()
        .route(
            "/api/catalog/versions",
            get(handlers::list_versions_handler).post(handlers::create_version_handler),
        )
        .route(
            "/api/catalog/versions/selected",
            get(handlers::selected_version_handler),
        )
        .route(
            "/api/catalog/versions/{version_id}",
            get(handlers::find_version_handler),
        )
        .route(
            "/api/catalog/versions/{version_id}/clone",
            post(handlers::clone_version_handler),
        )
        .route(
            "/api/catalog/versions/{version_id}/select",
            put(handlers::select_version_handler),
        )
        .route(
            "/api/catalog/versions/{version_id}/status",
            put(handlers::set_version_status_handler),
        )
        .route(
            "/api/catalog/versions/{version_id}/entries",
            get(handlers::search_entries_handler).post(handlers::add_entry_handler),
        )
        .route(
            "/api/catalog/versions/{version_id}/entries/{entry_id}",
            put(handlers::update_entry_handler),
        )
        .route(
            "/api/catalog/versions/{version_id}/entries/{entry_id}/delete",
            post(handlers::delete_entry_handler),
        )
        .route("/api/catalog/audit", get(handlers::list_audit_trail_handler));

    Ok(Router::new()
        .route("/health", get(handlers::health_handler))
        .merge(catalog_routes)
        .with_state(app_state)
        .layer(cors::build_cors_layer(frontend_url)?)
        .layer(TraceLayer::new_for_http()))
}
