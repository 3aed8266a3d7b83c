use essensys_domain::AuditEvent;
use serde::Serialize;
use ts_rs::TS;

use super::common::format_timestamp;

/// API representation of an audit trail event.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/audit-event-response.ts"
)]
pub struct AuditEventResponse {
    pub event_id: String,
    pub action: String,
    pub title: String,
    pub details: String,
    pub actor: String,
    pub timestamp: String,
}

impl From<AuditEvent> for AuditEventResponse {
    fn from(value: AuditEvent) -> Self {
        Self {
            event_id: value.id().to_string(),
            action: value.action().as_str().to_owned(),
            title: value.title().to_owned(),
            details: value.details().to_owned(),
            actor: value.actor().to_owned(),
            timestamp: format_timestamp(value.timestamp()),
        }
    }
}
