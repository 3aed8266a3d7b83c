use super::*;

#[derive(Debug, Default, serde::Deserialize)]
pub struct SearchEntriesQuery {
    pub q: Option<String>,
}

pub async fn search_entries_handler(
    State(state): State<AppState>,
    Path(version_id): Path<String>,
    Query(query): Query<SearchEntriesQuery>,
) -> ApiResult<Json<Vec<EntryResponse>>> {
    let entries = state
        .catalog_service
        .search_entries(
            VersionId::from_str(version_id.as_str())?,
            query.q.as_deref().unwrap_or_default(),
        )
        .await?
        .iter()
        .map(EntryResponse::from)
        .collect();

    Ok(Json(entries))
}

pub async fn add_entry_handler(
    State(state): State<AppState>,
    Path(version_id): Path<String>,
    Json(payload): Json<SaveEntryRequest>,
) -> ApiResult<(StatusCode, Json<EntryResponse>)> {
    let (fields, expected_updated_at) = payload.into_parts();
    let entry = state
        .catalog_service
        .add_entry(
            &state.actor,
            AddEntryInput {
                version_id: VersionId::from_str(version_id.as_str())?,
                fields,
                expected_updated_at: parse_expected_updated_at(expected_updated_at.as_deref())?,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(EntryResponse::from(&entry))))
}

pub async fn update_entry_handler(
    State(state): State<AppState>,
    Path((version_id, entry_id)): Path<(String, String)>,
    Json(payload): Json<SaveEntryRequest>,
) -> ApiResult<Json<EntryResponse>> {
    let (fields, expected_updated_at) = payload.into_parts();
    let entry = state
        .catalog_service
        .update_entry(
            &state.actor,
            UpdateEntryInput {
                version_id: VersionId::from_str(version_id.as_str())?,
                entry_id: EntryId::from_str(entry_id.as_str())?,
                fields,
                expected_updated_at: parse_expected_updated_at(expected_updated_at.as_deref())?,
            },
        )
        .await?;

    Ok(Json(EntryResponse::from(&entry)))
}

pub async fn delete_entry_handler(
    State(state): State<AppState>,
    Path((version_id, entry_id)): Path<(String, String)>,
    Json(payload): Json<DeleteEntryRequest>,
) -> ApiResult<Json<EntryDeletionResponse>> {
    let outcome = state
        .catalog_service
        .delete_entry(
            &state.actor,
            DeleteEntryInput {
                version_id: VersionId::from_str(version_id.as_str())?,
                entry_id: EntryId::from_str(entry_id.as_str())?,
                confirmed: payload.confirmed,
                expected_updated_at: parse_expected_updated_at(
                    payload.expected_updated_at.as_deref(),
                )?,
            },
        )
        .await?;

    Ok(Json(EntryDeletionResponse::from(outcome)))
}
