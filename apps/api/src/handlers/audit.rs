use super::*;

#[derive(Debug, Default, serde::Deserialize)]
pub struct AuditTrailParams {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    pub action: Option<String>,
}

pub async fn list_audit_trail_handler(
    State(state): State<AppState>,
    Query(query): Query<AuditTrailParams>,
) -> ApiResult<Json<Vec<AuditEventResponse>>> {
    let defaults = AuditTrailQuery::default();
    let action = query
        .action
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(AuditAction::from_str)
        .transpose()?;

    let events = state
        .catalog_service
        .list_audit_trail(AuditTrailQuery {
            limit: query.limit.unwrap_or(defaults.limit),
            offset: query.offset.unwrap_or(defaults.offset),
            action,
        })
        .await?
        .into_iter()
        .map(AuditEventResponse::from)
        .collect();

    Ok(Json(events))
}
