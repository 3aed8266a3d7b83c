use std::str::FromStr;

use essensys_core::AppError;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a catalog version.
///
/// Purely descriptive: any status may follow any other and no status gates
/// entry mutations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionStatus {
    /// Work in progress. Every new or cloned version starts here.
    #[default]
    Draft,
    /// Submitted for review.
    Review,
    /// Approved for use.
    Approved,
    /// Retired.
    Archive,
}

impl VersionStatus {
    /// Returns a stable storage value for this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Review => "review",
            Self::Approved => "approved",
            Self::Archive => "archive",
        }
    }

    /// Returns the dashboard label for this status.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Brouillon",
            Self::Review => "En revue",
            Self::Approved => "Approuve",
            Self::Archive => "Archive",
        }
    }

    /// Returns all known statuses in workflow order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[VersionStatus] = &[
            VersionStatus::Draft,
            VersionStatus::Review,
            VersionStatus::Approved,
            VersionStatus::Archive,
        ];

        ALL
    }
}

impl std::fmt::Display for VersionStatus {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for VersionStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "draft" => Ok(Self::Draft),
            "review" => Ok(Self::Review),
            "approved" => Ok(Self::Approved),
            "archive" => Ok(Self::Archive),
            _ => Err(AppError::Validation(format!(
                "unknown version status '{value}'"
            ))),
        }
    }
}
