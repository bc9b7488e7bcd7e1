// crates/search/src/domain/entities/post_summary.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::AccountId;

use crate::domain::value_objects::PostId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    id: PostId,
    author_id: AccountId,
    content: String,
    created_at: DateTime<Utc>,
}

impl PostSummary {
    pub fn restore(id: PostId, author_id: AccountId, content: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            author_id,
            content,
            created_at,
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn author_id(&self) -> &AccountId {
        &self.author_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl EntityMetadata for PostSummary {
    fn entity_name() -> &'static str {
        "Post"
    }
}
