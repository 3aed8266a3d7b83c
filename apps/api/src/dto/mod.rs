mod audit;
mod common;
mod entries;
mod versions;

pub use audit::AuditEventResponse;
pub use common::{HealthResponse, parse_expected_updated_at};
pub use entries::{DeleteEntryRequest, EntryDeletionResponse, EntryResponse, SaveEntryRequest};
pub use versions::{
    CloneVersionRequest, CreateVersionRequest, SetVersionStatusRequest, VersionResponse,
    VersionSummaryResponse,
};
