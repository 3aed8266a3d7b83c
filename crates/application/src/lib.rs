//! Catalog application services and ports.

#![forbid(unsafe_code)]

mod catalog_ports;
mod catalog_service;

pub use catalog_ports::{
    AddEntryInput, AuditTrailQuery, AuditTrailRepository, CatalogRepository, Clock,
    CloneVersionInput, DeleteEntryInput, EntryDeletionOutcome, ReferenceCatalogSource,
    SetVersionStatusInput, UpdateEntryInput,
};
pub use catalog_service::{CatalogService, SEEDED_VERSION_NAME};
