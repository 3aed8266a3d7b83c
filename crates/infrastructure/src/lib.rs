//! Infrastructure adapters for catalog application ports.

#![forbid(unsafe_code)]

mod in_memory_audit_trail_repository;
mod in_memory_catalog_repository;
mod json_reference_catalog_source;
mod system_clock;

pub use in_memory_audit_trail_repository::InMemoryAuditTrailRepository;
pub use in_memory_catalog_repository::InMemoryCatalogRepository;
pub use json_reference_catalog_source::JsonReferenceCatalogSource;
pub use system_clock::SystemClock;
