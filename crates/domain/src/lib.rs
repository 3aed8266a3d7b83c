//! Catalog domain entities and invariants.

#![forbid(unsafe_code)]

mod audit;
mod entry;
mod ids;
mod reference;
mod search;
mod status;
mod version;

pub use audit::{AUDIT_TRAIL_CAPACITY, AuditAction, AuditEvent, AuditTrail};
pub use entry::{CatalogEntry, EntryDefaults, EntryFields};
pub use ids::{AuditEventId, EntryId, VersionId};
pub use reference::{ReferenceCatalog, ReferenceEntryDefaults, ReferenceRecord};
pub use search::{SearchQuery, filter_entries};
pub use status::VersionStatus;
pub use version::CatalogVersion;
