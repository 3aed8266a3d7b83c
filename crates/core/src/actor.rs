use serde::{Deserialize, Serialize};

use crate::{AppResult, NonEmptyString};

/// Display name recorded on audit events when no operator is configured.
pub const DEFAULT_ACTOR_NAME: &str = "Admin";

/// Operator performing catalog mutations, recorded on every audit event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    name: NonEmptyString,
}

impl Actor {
    /// Creates an actor from a non-blank display name.
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name: String = name.into();
        Ok(Self {
            name: NonEmptyString::new(name.trim())?,
        })
    }

    /// Returns the actor display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            name: NonEmptyString(DEFAULT_ACTOR_NAME.to_owned()),
        }
    }
}
