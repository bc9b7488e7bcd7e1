// crates/rate-limit/src/domain/value_objects/rate_limit_action.rs

use crate::domain::value_objects::RateLimitPolicy;
use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use std::str::FromStr;

/// Actions sensibles soumises au rate limiting.
/// Le nom snake_case est la valeur stockée dans la colonne `action` de l'audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateLimitAction {
    Message,
    Conversation,
    ProfileUpdate,
    FileUpload,
    AuthAttempt,
    Search,
    BlockReport,
}

impl RateLimitAction {
    pub const ALL: [RateLimitAction; 7] = [
        Self::Message,
        Self::Conversation,
        Self::ProfileUpdate,
        Self::FileUpload,
        Self::AuthAttempt,
        Self::Search,
        Self::BlockReport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Conversation => "conversation",
            Self::ProfileUpdate => "profile_update",
            Self::FileUpload => "file_upload",
            Self::AuthAttempt => "auth_attempt",
            Self::Search => "search",
            Self::BlockReport => "block_report",
        }
    }

    /// Table de politiques figée au démarrage (max requêtes / fenêtre glissante).
    pub fn policy(&self) -> RateLimitPolicy {
        match self {
            Self::Message => RateLimitPolicy::new(30, 60),
            Self::Conversation => RateLimitPolicy::new(10, 3600),
            Self::ProfileUpdate => RateLimitPolicy::new(5, 3600),
            Self::FileUpload => RateLimitPolicy::new(10, 3600),
            Self::AuthAttempt => RateLimitPolicy::new(5, 300),
            Self::Search => RateLimitPolicy::new(100, 60),
            Self::BlockReport => RateLimitPolicy::new(20, 3600),
        }
    }
}

impl FromStr for RateLimitAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| DomainError::Validation {
                field: "action",
                reason: format!("Unknown rate limited action '{}'", s),
            })
    }
}

impl fmt::Display for RateLimitAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
