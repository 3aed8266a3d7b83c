use super::*;

pub async fn list_versions_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<VersionSummaryResponse>>> {
    let versions = state
        .catalog_service
        .list_versions()
        .await?
        .iter()
        .map(VersionSummaryResponse::from)
        .collect();

    Ok(Json(versions))
}

pub async fn create_version_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateVersionRequest>,
) -> ApiResult<(StatusCode, Json<VersionResponse>)> {
    let version = state
        .catalog_service
        .create_version(&state.actor, payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(VersionResponse::from(version))))
}

pub async fn selected_version_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Option<VersionResponse>>> {
    let version = state
        .catalog_service
        .selected_version()
        .await?
        .map(VersionResponse::from);

    Ok(Json(version))
}

pub async fn find_version_handler(
    State(state): State<AppState>,
    Path(version_id): Path<String>,
) -> ApiResult<Json<VersionResponse>> {
    let version = state
        .catalog_service
        .find_version(VersionId::from_str(version_id.as_str())?)
        .await?;

    Ok(Json(VersionResponse::from(version)))
}

pub async fn clone_version_handler(
    State(state): State<AppState>,
    Path(version_id): Path<String>,
    Json(payload): Json<CloneVersionRequest>,
) -> ApiResult<(StatusCode, Json<VersionResponse>)> {
    let version = state
        .catalog_service
        .clone_version(
            &state.actor,
            CloneVersionInput {
                source_version_id: VersionId::from_str(version_id.as_str())?,
                name: payload.name,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(VersionResponse::from(version))))
}

pub async fn select_version_handler(
    State(state): State<AppState>,
    Path(version_id): Path<String>,
) -> ApiResult<Json<VersionResponse>> {
    let version = state
        .catalog_service
        .select_version(VersionId::from_str(version_id.as_str())?)
        .await?;

    Ok(Json(VersionResponse::from(version)))
}

pub async fn set_version_status_handler(
    State(state): State<AppState>,
    Path(version_id): Path<String>,
    Json(payload): Json<SetVersionStatusRequest>,
) -> ApiResult<Json<VersionResponse>> {
    let version = state
        .catalog_service
        .set_status(
            &state.actor,
            SetVersionStatusInput {
                version_id: VersionId::from_str(version_id.as_str())?,
                status: VersionStatus::from_str(payload.status.trim())?,
                expected_updated_at: parse_expected_updated_at(
                    payload.expected_updated_at.as_deref(),
                )?,
            },
        )
        .await?;

    Ok(Json(VersionResponse::from(version)))
}
