// crates/search/src/infrastructure/postgres/repositories/postgres_support_request_search_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::PgPool;

use crate::domain::entities::SupportRequestSummary;
use crate::domain::repositories::SupportRequestSearchRepository;
use crate::domain::value_objects::SearchQuery;
use crate::infrastructure::postgres::rows::PostgresSupportRequestRow;
use crate::infrastructure::postgres::utils::contains_pattern;

pub struct PostgresSupportRequestSearchRepository {
    pool: PgPool,
}

impl PostgresSupportRequestSearchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SupportRequestSearchRepository for PostgresSupportRequestSearchRepository {
    async fn search_support_requests(&self, query: &SearchQuery, limit: i64) -> Result<Vec<SupportRequestSummary>> {
        let sql = r#"
            SELECT id, author_id, title, description, category, created_at
            FROM support_requests
            WHERE title ILIKE $1
               OR description ILIKE $1
               OR category ILIKE $1
            ORDER BY created_at DESC, id
            LIMIT $2
        "#;

        let rows = sqlx::query_as::<_, PostgresSupportRequestRow>(sql)
            .bind(contains_pattern(query.as_str()))
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_domain_infra("SupportRequestSearch")?;

        Ok(rows.into_iter().map(SupportRequestSummary::from).collect())
    }
}
