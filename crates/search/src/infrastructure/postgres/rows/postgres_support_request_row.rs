// crates/search/src/infrastructure/postgres/rows/postgres_support_request_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::AccountId;
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::entities::SupportRequestSummary;
use crate::domain::value_objects::SupportRequestId;

#[derive(FromRow, Debug)]
pub struct PostgresSupportRequestRow {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<PostgresSupportRequestRow> for SupportRequestSummary {
    fn from(row: PostgresSupportRequestRow) -> Self {
        SupportRequestSummary::restore(
            SupportRequestId::from(row.id),
            AccountId::new_unchecked(row.author_id),
            row.title,
            row.description,
            row.category,
            row.created_at,
        )
    }
}
