use async_trait::async_trait;
use essensys_application::{AuditTrailQuery, AuditTrailRepository};
use essensys_core::AppResult;
use essensys_domain::{AuditEvent, AuditTrail};
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory bounded audit trail.
#[derive(Debug, Default)]
pub struct InMemoryAuditTrailRepository {
    trail: RwLock<AuditTrail>,
}

impl InMemoryAuditTrailRepository {
    /// Creates an empty trail with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty trail around a pre-sized log.
    #[must_use]
    pub fn with_trail(trail: AuditTrail) -> Self {
        Self {
            trail: RwLock::new(trail),
        }
    }
}

#[async_trait]
impl AuditTrailRepository for InMemoryAuditTrailRepository {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        let action = event.action();
        let evicted = self.trail.write().await.record(event);

        debug!(
            action = action.as_str(),
            evicted, "appended catalog audit event"
        );
        Ok(())
    }

    async fn list_events(&self, query: AuditTrailQuery) -> AppResult<Vec<AuditEvent>> {
        Ok(self
            .trail
            .read()
            .await
            .iter()
            .filter(|event| query.action.is_none_or(|action| event.action() == action))
            .skip(query.offset)
            .take(query.limit)
            .cloned()
            .collect())
    }
}
