// crates/search/src/domain/entities/support_request_summary.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::AccountId;

use crate::domain::value_objects::SupportRequestId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportRequestSummary {
    id: SupportRequestId,
    author_id: AccountId,
    title: String,
    description: String,
    category: Option<String>,
    created_at: DateTime<Utc>,
}

impl SupportRequestSummary {
    pub fn restore(
        id: SupportRequestId,
        author_id: AccountId,
        title: String,
        description: String,
        category: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            title,
            description,
            category,
            created_at,
        }
    }

    pub fn id(&self) -> SupportRequestId {
        self.id
    }

    pub fn author_id(&self) -> &AccountId {
        &self.author_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl EntityMetadata for SupportRequestSummary {
    fn entity_name() -> &'static str {
        "SupportRequest"
    }
}
