use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use essensys_application::CatalogService;
use essensys_core::Actor;
use essensys_domain::{EntryDefaults, ReferenceCatalog};
use essensys_infrastructure::{
    InMemoryAuditTrailRepository, InMemoryCatalogRepository, SystemClock,
};
use serde_json::json;

use super::audit::AuditTrailParams;
use super::entries::SearchEntriesQuery;
use super::{
    add_entry_handler, clone_version_handler, create_version_handler, delete_entry_handler,
    find_version_handler, list_audit_trail_handler, list_versions_handler,
    selected_version_handler, set_version_status_handler, update_entry_handler,
};
use crate::dto::{
    CloneVersionRequest, CreateVersionRequest, DeleteEntryRequest, EntryResponse,
    SaveEntryRequest, SetVersionStatusRequest, VersionResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

fn build_state() -> AppState {
    AppState {
        catalog_service: CatalogService::new(
            Arc::new(InMemoryCatalogRepository::new()),
            Arc::new(InMemoryAuditTrailRepository::new()),
            Arc::new(SystemClock),
            EntryDefaults::default(),
        ),
        actor: Actor::default(),
    }
}

fn entry_request(categorie: &str, zone: &str, keys: &str, value: &str) -> SaveEntryRequest {
    SaveEntryRequest {
        categorie: categorie.to_owned(),
        zone: zone.to_owned(),
        keys: keys.to_owned(),
        value: value.to_owned(),
        ..SaveEntryRequest::default()
    }
}

async fn create_version(state: &AppState, name: Option<&str>) -> VersionResponse {
    let response = create_version_handler(
        State(state.clone()),
        Json(CreateVersionRequest {
            name: name.map(str::to_owned),
        }),
    )
    .await;

    let (status, Json(version)) = response.unwrap_or_else(|_| unreachable!());
    assert_eq!(status, StatusCode::CREATED);
    version
}

async fn add_entry(state: &AppState, version_id: &str, request: SaveEntryRequest) -> EntryResponse {
    let response = add_entry_handler(
        State(state.clone()),
        Path(version_id.to_owned()),
        Json(request),
    )
    .await;

    let (status, Json(entry)) = response.unwrap_or_else(|_| unreachable!());
    assert_eq!(status, StatusCode::CREATED);
    entry
}

fn status_of<T>(result: Result<T, ApiError>) -> StatusCode {
    result.err().unwrap_or_else(|| unreachable!()).into_response().status()
}

#[tokio::test]
async fn create_version_defaults_name_and_becomes_selected() {
    let state = build_state();

    let created = create_version(&state, None).await;
    assert_eq!(created.name, "Version 1");
    assert_eq!(created.status, "draft");
    assert_eq!(created.status_label, "Brouillon");

    let Json(selected) = selected_version_handler(State(state.clone()))
        .await
        .unwrap_or_else(|_| unreachable!());
    assert_eq!(
        selected.map(|version| version.version_id),
        Some(created.version_id)
    );

    let Json(audit) = list_audit_trail_handler(State(state), Query(AuditTrailParams::default()))
        .await
        .unwrap_or_else(|_| unreachable!());
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].title, "Nouvelle version");
    assert_eq!(audit[0].details, "Creation de Version 1.");
    assert_eq!(audit[0].actor, "Admin");
}

#[tokio::test]
async fn add_entry_with_missing_required_field_is_bad_request() {
    let state = build_state();
    let version = create_version(&state, Some("Version 1")).await;

    let result = add_entry_handler(
        State(state.clone()),
        Path(version.version_id.clone()),
        Json(entry_request("Eclairage", "", "K1", "V1")),
    )
    .await;
    assert_eq!(status_of(result), StatusCode::BAD_REQUEST);

    let Json(audit) = list_audit_trail_handler(State(state), Query(AuditTrailParams::default()))
        .await
        .unwrap_or_else(|_| unreachable!());
    assert_eq!(audit.len(), 1);
}

#[tokio::test]
async fn malformed_and_unknown_version_ids_map_to_distinct_statuses() {
    let state = build_state();

    let malformed = find_version_handler(State(state.clone()), Path("not-a-uuid".to_owned())).await;
    assert_eq!(status_of(malformed), StatusCode::BAD_REQUEST);

    let unknown = find_version_handler(
        State(state),
        Path("7a1f1f34-0d55-4a0f-9d0b-3f1ad2a6a5c1".to_owned()),
    )
    .await;
    assert_eq!(status_of(unknown), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stale_expected_updated_at_is_conflict() {
    let state = build_state();
    let version = create_version(&state, Some("Version 1")).await;
    let stale = version.updated_at.clone();

    add_entry(
        &state,
        version.version_id.as_str(),
        entry_request("Eclairage", "Salon", "K1", "V1"),
    )
    .await;

    let result = set_version_status_handler(
        State(state.clone()),
        Path(version.version_id.clone()),
        Json(SetVersionStatusRequest {
            status: "review".to_owned(),
            expected_updated_at: Some(stale),
        }),
    )
    .await;
    assert_eq!(status_of(result), StatusCode::CONFLICT);

    let Json(current) = find_version_handler(State(state.clone()), Path(version.version_id.clone()))
        .await
        .unwrap_or_else(|_| unreachable!());
    let result = set_version_status_handler(
        State(state),
        Path(version.version_id),
        Json(SetVersionStatusRequest {
            status: "review".to_owned(),
            expected_updated_at: Some(current.updated_at),
        }),
    )
    .await;

    let Json(updated) = result.unwrap_or_else(|_| unreachable!());
    assert_eq!(updated.status_label, "En revue");
}

#[tokio::test]
async fn unknown_status_is_bad_request() {
    let state = build_state();
    let version = create_version(&state, None).await;

    let result = set_version_status_handler(
        State(state),
        Path(version.version_id),
        Json(SetVersionStatusRequest {
            status: "published".to_owned(),
            expected_updated_at: None,
        }),
    )
    .await;

    assert_eq!(status_of(result), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_entry_keeps_position_and_unspecified_flags() {
    let state = build_state();
    let version = create_version(&state, None).await;
    let first = add_entry(
        &state,
        version.version_id.as_str(),
        SaveEntryRequest {
            web: Some(false),
            ..entry_request("Chauffage", "Etage", "K2", "V2")
        },
    )
    .await;
    add_entry(
        &state,
        version.version_id.as_str(),
        entry_request("Eclairage", "Salon", "K1", "V1"),
    )
    .await;

    let Json(updated) = update_entry_handler(
        State(state.clone()),
        Path((version.version_id.clone(), first.entry_id.clone())),
        Json(entry_request("Chauffage", "Etage", "K2", "V3")),
    )
    .await
    .unwrap_or_else(|_| unreachable!());

    assert_eq!(updated.entry_id, first.entry_id);
    assert_eq!(updated.value, "V3");
    assert!(!updated.web);
    assert!(updated.local);

    let Json(current) = find_version_handler(State(state), Path(version.version_id))
        .await
        .unwrap_or_else(|_| unreachable!());
    let keys: Vec<&str> = current.entries.iter().map(|entry| entry.keys.as_str()).collect();
    assert_eq!(keys, vec!["K1", "K2"]);
}

#[tokio::test]
async fn cancelled_then_confirmed_delete_is_audited_twice() {
    let state = build_state();
    let version = create_version(&state, None).await;
    let entry = add_entry(
        &state,
        version.version_id.as_str(),
        entry_request("Eclairage", "Salon", "K1", "V1"),
    )
    .await;

    let Json(cancelled) = delete_entry_handler(
        State(state.clone()),
        Path((version.version_id.clone(), entry.entry_id.clone())),
        Json(DeleteEntryRequest {
            confirmed: false,
            expected_updated_at: None,
        }),
    )
    .await
    .unwrap_or_else(|_| unreachable!());
    assert!(!cancelled.deleted);

    let Json(deleted) = delete_entry_handler(
        State(state.clone()),
        Path((version.version_id.clone(), entry.entry_id.clone())),
        Json(DeleteEntryRequest {
            confirmed: true,
            expected_updated_at: None,
        }),
    )
    .await
    .unwrap_or_else(|_| unreachable!());
    assert!(deleted.deleted);
    assert_eq!(deleted.entry.entry_id, entry.entry_id);

    let Json(audit) = list_audit_trail_handler(
        State(state.clone()),
        Query(AuditTrailParams::default()),
    )
    .await
    .unwrap_or_else(|_| unreachable!());
    let titles: Vec<&str> = audit.iter().map(|event| event.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Suppression entree",
            "Suppression annulee",
            "Ajout entree",
            "Nouvelle version"
        ]
    );
    assert_eq!(audit[0].details, "Eclairage - Salon (cle K1).");

    let Json(filtered) = list_audit_trail_handler(
        State(state),
        Query(AuditTrailParams {
            action: Some("catalog.entry.deletion_cancelled".to_owned()),
            ..AuditTrailParams::default()
        }),
    )
    .await
    .unwrap_or_else(|_| unreachable!());
    assert_eq!(filtered.len(), 1);
}

#[tokio::test]
async fn search_filters_case_insensitively_and_blank_returns_everything() {
    let state = build_state();
    let version = create_version(&state, None).await;
    add_entry(
        &state,
        version.version_id.as_str(),
        entry_request("Chauffage", "Etage", "K2", "V2"),
    )
    .await;
    add_entry(
        &state,
        version.version_id.as_str(),
        entry_request("Eclairage", "Salon", "K1", "V1"),
    )
    .await;

    let Json(matches) = super::search_entries_handler(
        State(state.clone()),
        Path(version.version_id.clone()),
        Query(SearchEntriesQuery {
            q: Some("  SALON ".to_owned()),
        }),
    )
    .await
    .unwrap_or_else(|_| unreachable!());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].keys, "K1");

    let Json(everything) = super::search_entries_handler(
        State(state),
        Path(version.version_id),
        Query(SearchEntriesQuery::default()),
    )
    .await
    .unwrap_or_else(|_| unreachable!());
    assert_eq!(everything.len(), 2);
}

#[tokio::test]
async fn clone_copies_entries_with_fresh_ids() {
    let state = build_state();
    let source = create_version(&state, Some("Version 1")).await;
    let entry = add_entry(
        &state,
        source.version_id.as_str(),
        entry_request("Eclairage", "Salon", "K1", "V1"),
    )
    .await;

    let (status, Json(cloned)) = clone_version_handler(
        State(state.clone()),
        Path(source.version_id.clone()),
        Json(CloneVersionRequest {
            name: Some("Version 2".to_owned()),
        }),
    )
    .await
    .unwrap_or_else(|_| unreachable!());

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(cloned.name, "Version 2");
    assert_eq!(cloned.status, "draft");
    assert_eq!(cloned.entries.len(), 1);
    assert_ne!(cloned.entries[0].entry_id, entry.entry_id);

    let Json(versions) = list_versions_handler(State(state))
        .await
        .unwrap_or_else(|_| unreachable!());
    let names: Vec<&str> = versions.iter().map(|version| version.name.as_str()).collect();
    assert_eq!(names, vec!["Version 2", "Version 1"]);
}

#[tokio::test]
async fn zero_audit_limit_and_unknown_action_are_bad_requests() {
    let state = build_state();

    let zero = list_audit_trail_handler(
        State(state.clone()),
        Query(AuditTrailParams {
            limit: Some(0),
            ..AuditTrailParams::default()
        }),
    )
    .await;
    assert_eq!(status_of(zero), StatusCode::BAD_REQUEST);

    let unknown = list_audit_trail_handler(
        State(state),
        Query(AuditTrailParams {
            action: Some("catalog.version.deleted".to_owned()),
            ..AuditTrailParams::default()
        }),
    )
    .await;
    assert_eq!(status_of(unknown), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn seeded_reference_version_serializes_for_the_dashboard() {
    let state = build_state();
    let reference = ReferenceCatalog::from_json_str(
        r#"{"entries":[{"categorie":"","zone":"Maison","piece":"NULL","keys":"K9","value":"1"}]}"#,
    )
    .unwrap_or_else(|_| unreachable!());

    let seeded = state
        .catalog_service
        .bootstrap_from_reference(reference)
        .await
        .unwrap_or_else(|_| unreachable!());

    let Json(selected) = selected_version_handler(State(state))
        .await
        .unwrap_or_else(|_| unreachable!());
    let body = serde_json::to_value(selected).unwrap_or_else(|_| json!({}));

    assert_eq!(body["version_id"], json!(seeded.id().to_string()));
    assert_eq!(body["name"], json!("Version 1"));
    assert_eq!(body["entries"][0]["categorie"], json!("Autres"));
    assert_eq!(body["entries"][0]["piece"], json!(""));
    assert_eq!(body["entries"][0]["web"], json!(true));
}
