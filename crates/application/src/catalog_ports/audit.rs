use async_trait::async_trait;
use essensys_core::AppResult;
use essensys_domain::{AUDIT_TRAIL_CAPACITY, AuditAction, AuditEvent};

/// Query parameters for audit trail listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditTrailQuery {
    /// Maximum events returned.
    pub limit: usize,
    /// Number of most recent events skipped.
    pub offset: usize,
    /// Optional action filter.
    pub action: Option<AuditAction>,
}

impl Default for AuditTrailQuery {
    fn default() -> Self {
        Self {
            limit: AUDIT_TRAIL_CAPACITY,
            offset: 0,
            action: None,
        }
    }
}

/// Port for the bounded, append-only catalog audit trail.
#[async_trait]
pub trait AuditTrailRepository: Send + Sync {
    /// Prepends one event, evicting the oldest beyond the trail capacity.
    async fn append_event(&self, event: AuditEvent) -> AppResult<()>;

    /// Lists events most recent first.
    async fn list_events(&self, query: AuditTrailQuery) -> AppResult<Vec<AuditEvent>>;
}
