mod audit;
mod clock;
mod inputs;
mod reference;
mod repository;

pub use audit::{AuditTrailQuery, AuditTrailRepository};
pub use clock::Clock;
pub use inputs::{
    AddEntryInput, CloneVersionInput, DeleteEntryInput, EntryDeletionOutcome,
    SetVersionStatusInput, UpdateEntryInput,
};
pub use reference::ReferenceCatalogSource;
pub use repository::CatalogRepository;
