// crates/search/src/domain/repositories/community_search_repository_stub.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{DomainError, Result};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::{PostSummary, SearchableProfile, SupportRequestSummary};
use crate::domain::repositories::{
    PostSearchRepository, ProfileSearchRepository, SupportRequestSearchRepository,
};
use crate::domain::value_objects::SearchQuery;

/// Backend en mémoire : renvoie les jeux préchargés tels quels (le pré-filtrage
/// est la responsabilité des adapters réels), en respectant `limit`.
pub struct CommunitySearchRepositoryStub {
    pub profiles: Mutex<Vec<SearchableProfile>>,
    pub posts: Mutex<Vec<PostSummary>>,
    pub support_requests: Mutex<Vec<SupportRequestSummary>>,
    pub display_names: Mutex<HashMap<AccountId, String>>,

    pub profile_error: Mutex<Option<DomainError>>,
    pub post_error: Mutex<Option<DomainError>>,
    pub support_request_error: Mutex<Option<DomainError>>,
    pub names_error: Mutex<Option<DomainError>>,

    pub fetch_calls: Mutex<usize>,
    pub name_lookups: Mutex<Vec<Vec<AccountId>>>,
}

impl Default for CommunitySearchRepositoryStub {
    fn default() -> Self {
        Self {
            profiles: Mutex::new(vec![]),
            posts: Mutex::new(vec![]),
            support_requests: Mutex::new(vec![]),
            display_names: Mutex::new(HashMap::new()),
            profile_error: Mutex::new(None),
            post_error: Mutex::new(None),
            support_request_error: Mutex::new(None),
            names_error: Mutex::new(None),
            fetch_calls: Mutex::new(0),
            name_lookups: Mutex::new(vec![]),
        }
    }
}

impl CommunitySearchRepositoryStub {
    pub fn with_profiles(profiles: Vec<SearchableProfile>) -> Self {
        Self {
            profiles: Mutex::new(profiles),
            ..Default::default()
        }
    }

    pub fn add_display_name(&self, id: AccountId, name: &str) {
        self.display_names.lock().unwrap().insert(id, name.to_string());
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetch_calls.lock().unwrap()
    }

    fn record_fetch(&self) {
        *self.fetch_calls.lock().unwrap() += 1;
    }
}

fn take_limited<T: Clone>(items: &[T], limit: i64) -> Vec<T> {
    let limit = usize::try_from(limit).unwrap_or(0);
    items.iter().take(limit).cloned().collect()
}

#[async_trait]
impl ProfileSearchRepository for CommunitySearchRepositoryStub {
    async fn search_profiles(&self, _query: &SearchQuery, limit: i64) -> Result<Vec<SearchableProfile>> {
        self.record_fetch();
        if let Some(err) = self.profile_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(take_limited(&self.profiles.lock().unwrap(), limit))
    }

    async fn find_display_names(&self, ids: &[AccountId]) -> Result<HashMap<AccountId, String>> {
        self.name_lookups.lock().unwrap().push(ids.to_vec());
        if let Some(err) = self.names_error.lock().unwrap().clone() {
            return Err(err);
        }

        let names = self.display_names.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| names.get(id).map(|name| (*id, name.clone())))
            .collect())
    }
}

#[async_trait]
impl PostSearchRepository for CommunitySearchRepositoryStub {
    async fn search_posts(&self, _query: &SearchQuery, limit: i64) -> Result<Vec<PostSummary>> {
        self.record_fetch();
        if let Some(err) = self.post_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(take_limited(&self.posts.lock().unwrap(), limit))
    }
}

#[async_trait]
impl SupportRequestSearchRepository for CommunitySearchRepositoryStub {
    async fn search_support_requests(&self, _query: &SearchQuery, limit: i64) -> Result<Vec<SupportRequestSummary>> {
        self.record_fetch();
        if let Some(err) = self.support_request_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(take_limited(&self.support_requests.lock().unwrap(), limit))
    }
}
