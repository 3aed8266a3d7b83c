use chrono::{DateTime, Utc};

/// Port providing the current time to catalog use-cases.
pub trait Clock: Send + Sync {
    /// Returns the current UTC instant.
    fn now(&self) -> DateTime<Utc>;
}
