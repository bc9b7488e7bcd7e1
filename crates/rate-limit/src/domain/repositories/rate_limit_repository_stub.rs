// crates/rate-limit/src/domain/repositories/rate_limit_repository_stub.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{DomainError, Result};
use std::sync::Mutex;

use crate::domain::entities::RateLimitRecord;
use crate::domain::repositories::RateLimitRepository;
use crate::domain::value_objects::RateLimitAction;

// --- STUB RATE LIMIT REPOSITORY (in-memory) ---
pub struct RateLimitRepositoryStub {
    pub records: Mutex<Vec<RateLimitRecord>>,
    pub count_error: Mutex<Option<DomainError>>,
    pub insert_error: Mutex<Option<DomainError>>,
    pub oldest_error: Mutex<Option<DomainError>>,
}

impl Default for RateLimitRepositoryStub {
    fn default() -> Self {
        Self {
            records: Mutex::new(vec![]),
            count_error: Mutex::new(None),
            insert_error: Mutex::new(None),
            oldest_error: Mutex::new(None),
        }
    }
}

impl RateLimitRepositoryStub {
    pub fn with_records(records: Vec<RateLimitRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Default::default()
        }
    }

    pub fn failing_count(err: DomainError) -> Self {
        Self {
            count_error: Mutex::new(Some(err)),
            ..Default::default()
        }
    }

    pub fn stored(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl RateLimitRepository for RateLimitRepositoryStub {
    async fn count_since(&self, account_id: &AccountId, action: RateLimitAction, since: DateTime<Utc>) -> Result<u64> {
        if let Some(err) = self.count_error.lock().unwrap().clone() {
            return Err(err);
        }
        let records = self.records.lock().unwrap();
        Ok(records.iter().filter(|r| r.is_within(account_id, action, since)).count() as u64)
    }

    async fn oldest_since(&self, account_id: &AccountId, action: RateLimitAction, since: DateTime<Utc>) -> Result<Option<DateTime<Utc>>> {
        if let Some(err) = self.oldest_error.lock().unwrap().clone() {
            return Err(err);
        }
        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| r.is_within(account_id, action, since))
            .map(|r| r.created_at())
            .min())
    }

    async fn insert(&self, record: &RateLimitRecord) -> Result<()> {
        if let Some(err) = self.insert_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    // Atomique ici : le count et le push se font sous le même verrou
    async fn insert_if_below(&self, record: &RateLimitRecord, since: DateTime<Utc>, max: u32) -> Result<bool> {
        if let Some(err) = self.count_error.lock().unwrap().clone() {
            return Err(err);
        }
        let mut records = self.records.lock().unwrap();
        let count = records
            .iter()
            .filter(|r| r.is_within(record.account_id(), record.action(), since))
            .count() as u64;
        if count >= u64::from(max) {
            return Ok(false);
        }
        if let Some(err) = self.insert_error.lock().unwrap().clone() {
            return Err(err);
        }
        records.push(record.clone());
        Ok(true)
    }
}
