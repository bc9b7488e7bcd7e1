// crates/search/src/domain/repositories/post_search_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::entities::PostSummary;
use crate::domain::value_objects::SearchQuery;

#[async_trait]
pub trait PostSearchRepository: Send + Sync {
    /// Publications dont le contenu contient la requête, plus récentes d'abord.
    async fn search_posts(&self, query: &SearchQuery, limit: i64) -> Result<Vec<PostSummary>>;
}
