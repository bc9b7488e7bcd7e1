// crates/rate-limit/src/domain/repositories/rate_limit_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;

use crate::domain::entities::RateLimitRecord;
use crate::domain::value_objects::RateLimitAction;

#[async_trait]
pub trait RateLimitRepository: Send + Sync {
    /// Nombre d'enregistrements (compte, action) avec `created_at >= since`
    async fn count_since(&self, account_id: &AccountId, action: RateLimitAction, since: DateTime<Utc>) -> Result<u64>;

    /// Timestamp du plus ancien enregistrement encore dans la fenêtre
    async fn oldest_since(&self, account_id: &AccountId, action: RateLimitAction, since: DateTime<Utc>) -> Result<Option<DateTime<Utc>>>;

    async fn insert(&self, record: &RateLimitRecord) -> Result<()>;

    /// Check-and-insert. L'implémentation par défaut fait deux allers-retours (non atomique) ;
    /// les adapters capables de sérialiser côté serveur la surchargent.
    async fn insert_if_below(&self, record: &RateLimitRecord, since: DateTime<Utc>, max: u32) -> Result<bool> {
        let count = self.count_since(record.account_id(), record.action(), since).await?;
        if count >= u64::from(max) {
            return Ok(false);
        }
        self.insert(record).await?;
        Ok(true)
    }
}
