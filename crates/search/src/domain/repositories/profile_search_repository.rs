// crates/search/src/domain/repositories/profile_search_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::Result;
use std::collections::HashMap;

use crate::domain::entities::SearchableProfile;
use crate::domain::value_objects::SearchQuery;

#[async_trait]
pub trait ProfileSearchRepository: Send + Sync {
    /// Pré-filtre grossier côté backend ; le classement reste fait en mémoire.
    async fn search_profiles(&self, query: &SearchQuery, limit: i64) -> Result<Vec<SearchableProfile>>;

    /// Résolution groupée des noms d'auteurs. Les ids inconnus sont absents de la map.
    async fn find_display_names(&self, ids: &[AccountId]) -> Result<HashMap<AccountId, String>>;
}
