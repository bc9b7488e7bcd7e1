// crates/search/src/domain/value_objects/support_request_id.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifiant d'une demande d'entraide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportRequestId(Uuid);

impl SupportRequestId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn try_new(id: impl Into<String>) -> Result<Self> {
        Self::from_str(&id.into())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SupportRequestId {
    fn default() -> Self {
        Self::new()
    }
}

// --- CONVERSIONS ---

impl From<Uuid> for SupportRequestId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for SupportRequestId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::Validation {
                field: "support_request_id",
                reason: format!("'{}' is not a valid UUID for SupportRequestId", s),
            })
    }
}

impl fmt::Display for SupportRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl EntityMetadata for SupportRequestId {
    fn entity_name() -> &'static str {
        "SupportRequest"
    }
}
