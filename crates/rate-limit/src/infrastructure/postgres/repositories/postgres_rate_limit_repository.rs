// crates/rate-limit/src/infrastructure/postgres/repositories/postgres_rate_limit_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;

use crate::domain::entities::RateLimitRecord;
use crate::domain::repositories::RateLimitRepository;
use crate::domain::value_objects::RateLimitAction;

pub struct PostgresRateLimitRepository {
    pool: PgPool,
}

impl PostgresRateLimitRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn lock_key(account_id: &AccountId, action: RateLimitAction) -> String {
        format!("rate_limit:{}:{}", account_id, action.as_str())
    }
}

#[async_trait]
impl RateLimitRepository for PostgresRateLimitRepository {
    async fn count_since(&self, account_id: &AccountId, action: RateLimitAction, since: DateTime<Utc>) -> Result<u64> {
        let sql = r#"
            SELECT COUNT(*)
            FROM rate_limit_audit
            WHERE account_id = $1 AND action = $2 AND created_at >= $3
        "#;

        let count: i64 = sqlx::query_scalar(sql)
            .bind(account_id.as_uuid())
            .bind(action.as_str())
            .bind(since)
            .fetch_one(&self.pool)
            .await
            .map_domain_infra("RateLimitCount")?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn oldest_since(&self, account_id: &AccountId, action: RateLimitAction, since: DateTime<Utc>) -> Result<Option<DateTime<Utc>>> {
        let sql = r#"
            SELECT MIN(created_at)
            FROM rate_limit_audit
            WHERE account_id = $1 AND action = $2 AND created_at >= $3
        "#;

        sqlx::query_scalar::<_, Option<DateTime<Utc>>>(sql)
            .bind(account_id.as_uuid())
            .bind(action.as_str())
            .bind(since)
            .fetch_one(&self.pool)
            .await
            .map_domain_infra("RateLimitOldest")
    }

    async fn insert(&self, record: &RateLimitRecord) -> Result<()> {
        let sql = r#"
            INSERT INTO rate_limit_audit (id, account_id, action, created_at)
            VALUES ($1, $2, $3, $4)
        "#;

        sqlx::query(sql)
            .bind(record.id())
            .bind(record.account_id().as_uuid())
            .bind(record.action().as_str())
            .bind(record.created_at())
            .execute(&self.pool)
            .await
            .map_domain::<RateLimitRecord>()?;

        Ok(())
    }

    /// Sérialise les appels d'un même (compte, action) via un advisory lock transactionnel.
    /// Le COUNT est exécuté après l'obtention du verrou, donc voit les inserts déjà commités.
    async fn insert_if_below(&self, record: &RateLimitRecord, since: DateTime<Utc>, max: u32) -> Result<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_domain_infra("RateLimitBegin")?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
            .bind(Self::lock_key(record.account_id(), record.action()))
            .execute(&mut *tx)
            .await
            .map_domain_infra("RateLimitLock")?;

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM rate_limit_audit WHERE account_id = $1 AND action = $2 AND created_at >= $3",
        )
        .bind(record.account_id().as_uuid())
        .bind(record.action().as_str())
        .bind(since)
        .fetch_one(&mut *tx)
        .await
        .map_domain_infra("RateLimitCount")?;

        if count >= i64::from(max) {
            tx.rollback().await.map_domain_infra("RateLimitRollback")?;
            return Ok(false);
        }

        sqlx::query("INSERT INTO rate_limit_audit (id, account_id, action, created_at) VALUES ($1, $2, $3, $4)")
            .bind(record.id())
            .bind(record.account_id().as_uuid())
            .bind(record.action().as_str())
            .bind(record.created_at())
            .execute(&mut *tx)
            .await
            .map_domain::<RateLimitRecord>()?;

        tx.commit().await.map_domain_infra("RateLimitCommit")?;
        Ok(true)
    }
}
