// crates/rate-limit/src/domain/entities/rate_limit_record.rs

use crate::domain::value_objects::RateLimitAction;
use chrono::{DateTime, Utc};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::AccountId;
use uuid::Uuid;

/// Ligne du journal d'audit (append-only).
/// Aucune mutation après écriture : seules les requêtes de fenêtre futures la lisent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitRecord {
    id: Uuid,
    account_id: AccountId,
    action: RateLimitAction,
    created_at: DateTime<Utc>,
}

impl RateLimitRecord {
    pub fn new(account_id: AccountId, action: RateLimitAction, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            account_id,
            action,
            created_at,
        }
    }

    // --- Getters (Lecture seule) ---

    pub fn id(&self) -> Uuid { self.id }
    pub fn account_id(&self) -> &AccountId { &self.account_id }
    pub fn action(&self) -> RateLimitAction { self.action }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }

    pub fn is_within(&self, account_id: &AccountId, action: RateLimitAction, since: DateTime<Utc>) -> bool {
        &self.account_id == account_id && self.action == action && self.created_at >= since
    }
}

impl EntityMetadata for RateLimitRecord {
    fn entity_name() -> &'static str {
        "RateLimitRecord"
    }
}
