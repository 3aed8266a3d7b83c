use std::collections::VecDeque;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use essensys_core::{Actor, AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::AuditEventId;

/// Maximum number of events retained by the catalog audit trail.
pub const AUDIT_TRAIL_CAPACITY: usize = 150;

/// Stable audit actions emitted by catalog use-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Emitted when an empty version is created.
    VersionCreated,
    /// Emitted when a version is cloned.
    VersionCloned,
    /// Emitted when a version status is overwritten.
    VersionStatusChanged,
    /// Emitted when an entry is added.
    EntryAdded,
    /// Emitted when an entry is edited.
    EntryUpdated,
    /// Emitted when the operator declines a deletion.
    EntryDeletionCancelled,
    /// Emitted when an entry is deleted.
    EntryDeleted,
}

impl AuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VersionCreated => "catalog.version.created",
            Self::VersionCloned => "catalog.version.cloned",
            Self::VersionStatusChanged => "catalog.version.status_changed",
            Self::EntryAdded => "catalog.entry.added",
            Self::EntryUpdated => "catalog.entry.updated",
            Self::EntryDeletionCancelled => "catalog.entry.deletion_cancelled",
            Self::EntryDeleted => "catalog.entry.deleted",
        }
    }

    /// Returns the human-readable title shown in the audit trail.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::VersionCreated => "Nouvelle version",
            Self::VersionCloned => "Clonage version",
            Self::VersionStatusChanged => "Changement de statut",
            Self::EntryAdded => "Ajout entree",
            Self::EntryUpdated => "Modification entree",
            Self::EntryDeletionCancelled => "Suppression annulee",
            Self::EntryDeleted => "Suppression entree",
        }
    }
}

impl FromStr for AuditAction {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "catalog.version.created" => Ok(Self::VersionCreated),
            "catalog.version.cloned" => Ok(Self::VersionCloned),
            "catalog.version.status_changed" => Ok(Self::VersionStatusChanged),
            "catalog.entry.added" => Ok(Self::EntryAdded),
            "catalog.entry.updated" => Ok(Self::EntryUpdated),
            "catalog.entry.deletion_cancelled" => Ok(Self::EntryDeletionCancelled),
            "catalog.entry.deleted" => Ok(Self::EntryDeleted),
            _ => Err(AppError::Validation(format!(
                "unknown audit action '{value}'"
            ))),
        }
    }
}

/// Immutable record of one catalog action, cancelled ones included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    id: AuditEventId,
    action: AuditAction,
    title: String,
    details: String,
    actor: String,
    timestamp: DateTime<Utc>,
}

impl AuditEvent {
    /// Records an action performed by `actor` at `timestamp`.
    #[must_use]
    pub fn new(
        action: AuditAction,
        details: impl Into<String>,
        actor: &Actor,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AuditEventId::new(),
            action,
            title: action.title().to_owned(),
            details: details.into(),
            actor: actor.name().to_owned(),
            timestamp,
        }
    }

    /// Returns the event identifier.
    #[must_use]
    pub fn id(&self) -> AuditEventId {
        self.id
    }

    /// Returns the stable action.
    #[must_use]
    pub fn action(&self) -> AuditAction {
        self.action
    }

    /// Returns the event title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the event details.
    #[must_use]
    pub fn details(&self) -> &str {
        self.details.as_str()
    }

    /// Returns the actor display name.
    #[must_use]
    pub fn actor(&self) -> &str {
        self.actor.as_str()
    }

    /// Returns when the event was recorded.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Bounded, most-recent-first log of audit events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditTrail {
    capacity: usize,
    events: VecDeque<AuditEvent>,
}

impl AuditTrail {
    /// Creates an empty trail retaining at most `capacity` events.
    pub fn with_capacity(capacity: usize) -> AppResult<Self> {
        if capacity == 0 {
            return Err(AppError::Validation(
                "audit trail capacity must be at least 1".to_owned(),
            ));
        }

        Ok(Self {
            capacity,
            events: VecDeque::with_capacity(capacity),
        })
    }

    /// Prepends an event and returns how many of the oldest were evicted.
    pub fn record(&mut self, event: AuditEvent) -> usize {
        self.events.push_front(event);

        let overflow = self.events.len().saturating_sub(self.capacity);
        self.events.truncate(self.capacity);
        overflow
    }

    /// Iterates events, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &AuditEvent> {
        self.events.iter()
    }

    /// Returns the number of retained events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether no event was recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the retention limit.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for AuditTrail {
    fn default() -> Self {
        Self {
            capacity: AUDIT_TRAIL_CAPACITY,
            events: VecDeque::with_capacity(AUDIT_TRAIL_CAPACITY),
        }
    }
}
