use super::*;

impl CatalogService {
    /// Lists audit events most recent first, cancelled actions included.
    pub async fn list_audit_trail(&self, query: AuditTrailQuery) -> AppResult<Vec<AuditEvent>> {
        if query.limit == 0 {
            return Err(AppError::Validation(
                "audit trail limit must be at least 1".to_owned(),
            ));
        }

        self.audit_repository.list_events(query).await
    }
}
