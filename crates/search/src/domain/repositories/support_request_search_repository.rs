// crates/search/src/domain/repositories/support_request_search_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::entities::SupportRequestSummary;
use crate::domain::value_objects::SearchQuery;

#[async_trait]
pub trait SupportRequestSearchRepository: Send + Sync {
    /// Match sur titre, description ou catégorie, plus récentes d'abord.
    async fn search_support_requests(&self, query: &SearchQuery, limit: i64) -> Result<Vec<SupportRequestSummary>>;
}
