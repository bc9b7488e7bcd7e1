// crates/search/src/infrastructure/postgres/rows/postgres_post_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::AccountId;
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::entities::PostSummary;
use crate::domain::value_objects::PostId;

#[derive(FromRow, Debug)]
pub struct PostgresPostRow {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<PostgresPostRow> for PostSummary {
    fn from(row: PostgresPostRow) -> Self {
        PostSummary::restore(
            PostId::from(row.id),
            AccountId::new_unchecked(row.author_id),
            row.content,
            row.created_at,
        )
    }
}
