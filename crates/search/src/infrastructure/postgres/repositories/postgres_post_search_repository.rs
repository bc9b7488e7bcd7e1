// crates/search/src/infrastructure/postgres/repositories/postgres_post_search_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::PgPool;

use crate::domain::entities::PostSummary;
use crate::domain::repositories::PostSearchRepository;
use crate::domain::value_objects::SearchQuery;
use crate::infrastructure::postgres::rows::PostgresPostRow;
use crate::infrastructure::postgres::utils::contains_pattern;

pub struct PostgresPostSearchRepository {
    pool: PgPool,
}

impl PostgresPostSearchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostSearchRepository for PostgresPostSearchRepository {
    async fn search_posts(&self, query: &SearchQuery, limit: i64) -> Result<Vec<PostSummary>> {
        let sql = r#"
            SELECT id, author_id, content, created_at
            FROM posts
            WHERE content ILIKE $1
            ORDER BY created_at DESC, id
            LIMIT $2
        "#;

        let rows = sqlx::query_as::<_, PostgresPostRow>(sql)
            .bind(contains_pattern(query.as_str()))
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_domain_infra("PostSearch")?;

        Ok(rows.into_iter().map(PostSummary::from).collect())
    }
}
