// crates/search/src/application/search_community/search_community_use_case.rs

use dashmap::DashMap;
use rate_limit::application::ports::RateLimiter;
use rate_limit::domain::value_objects::RateLimitAction;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{DomainError, Result};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::application::search_community::{
    PostHit, SearchCommunityCommand, SearchResults, SupportRequestHit,
};
use crate::config::SearchSettings;
use crate::domain::entities::{PostSummary, SupportRequestSummary};
use crate::domain::repositories::{
    PostSearchRepository, ProfileSearchRepository, SupportRequestSearchRepository,
};
use crate::domain::services::RelevanceScorer;
use crate::domain::value_objects::{
    CategoryFilter, LocationFilter, SearchCriteria, SearchQuery, SearchTicket,
};

pub struct SearchCommunityUseCase {
    profiles: Arc<dyn ProfileSearchRepository>,
    posts: Arc<dyn PostSearchRepository>,
    support_requests: Arc<dyn SupportRequestSearchRepository>,
    rate_limiter: Arc<dyn RateLimiter>,
    settings: SearchSettings,
    ticket_sequence: AtomicU64,
    // Dernier ticket émis par compte ; l'entrée disparaît quand ce ticket se termine
    latest_tickets: DashMap<AccountId, u64>,
}

impl SearchCommunityUseCase {
    pub fn new(
        profiles: Arc<dyn ProfileSearchRepository>,
        posts: Arc<dyn PostSearchRepository>,
        support_requests: Arc<dyn SupportRequestSearchRepository>,
        rate_limiter: Arc<dyn RateLimiter>,
        settings: SearchSettings,
    ) -> Self {
        Self {
            profiles,
            posts,
            support_requests,
            rate_limiter,
            settings,
            ticket_sequence: AtomicU64::new(0),
            latest_tickets: DashMap::new(),
        }
    }

    /// `Ok(None)` : le même compte a lancé une recherche plus récente entre-temps,
    /// la réponse est périmée. Les recherches des autres comptes n'interfèrent pas.
    pub async fn execute(&self, cmd: SearchCommunityCommand) -> Result<Option<SearchResults>> {
        let account_id = cmd.account_id;
        let ticket = self.issue_ticket(&account_id);

        match self.search(ticket, cmd).await {
            Ok(results) => Ok(self.deliver(&account_id, results)),
            Err(err) => {
                self.release(&account_id, ticket);
                Err(err)
            }
        }
    }

    async fn search(&self, ticket: SearchTicket, cmd: SearchCommunityCommand) -> Result<SearchResults> {
        // 1. Validation des entrées
        let query = SearchQuery::try_new(cmd.query)?;
        let location = LocationFilter::try_new(cmd.location)?;
        let categories = CategoryFilter::try_new(cmd.categories)?;

        // 2. Requête vide : aucun appel backend, pas même le rate limiter
        if query.is_empty() {
            return Ok(SearchResults::empty(ticket));
        }

        // 3. Rate limiting
        self.ensure_allowed(&cmd.account_id).await?;

        // 4. Fan-out des trois lectures, échec global au premier échec
        let limit = self.settings.fetch_limit();
        let (profiles, posts, support_requests) = tokio::try_join!(
            self.profiles.search_profiles(&query, limit),
            self.posts.search_posts(&query, limit),
            self.support_requests.search_support_requests(&query, limit),
        )
        .inspect_err(|err| {
            tracing::error!(ticket = %ticket, error = %err, "Community search fetch failed");
        })?;

        // 5. Classement des profils
        let criteria = SearchCriteria::new(&query, &location, &categories);
        let ranked = RelevanceScorer::rank(profiles, &criteria);

        // 6. Noms des auteurs en un seul appel
        let names = self.resolve_authors(&posts, &support_requests).await?;

        let results = SearchResults {
            ticket,
            profiles: ranked,
            posts: posts
                .into_iter()
                .map(|post| PostHit {
                    author_name: names.get(post.author_id()).cloned(),
                    post,
                })
                .collect(),
            support_requests: support_requests
                .into_iter()
                .map(|request| SupportRequestHit {
                    author_name: names.get(request.author_id()).cloned(),
                    request,
                })
                .collect(),
        };

        tracing::info!(
            ticket = %ticket,
            profiles = results.profiles.len(),
            posts = results.posts.len(),
            support_requests = results.support_requests.len(),
            "Community search completed"
        );

        Ok(results)
    }

    fn issue_ticket(&self, account_id: &AccountId) -> SearchTicket {
        let value = self.ticket_sequence.fetch_add(1, Ordering::SeqCst) + 1;
        self.latest_tickets.insert(*account_id, value);
        SearchTicket::new(value)
    }

    /// Retire l'entrée du compte si `ticket` est toujours le dernier émis.
    /// Vrai si c'était le cas.
    fn release(&self, account_id: &AccountId, ticket: SearchTicket) -> bool {
        self.latest_tickets
            .remove_if(account_id, |_, latest| *latest == ticket.value())
            .is_some()
    }

    fn deliver(&self, account_id: &AccountId, results: SearchResults) -> Option<SearchResults> {
        if self.release(account_id, results.ticket) {
            Some(results)
        } else {
            tracing::debug!(
                account_id = %account_id,
                ticket = %results.ticket,
                "Stale search response discarded"
            );
            None
        }
    }

    async fn ensure_allowed(&self, account_id: &AccountId) -> Result<()> {
        let decision = self
            .rate_limiter
            .check_and_record(account_id, RateLimitAction::Search)
            .await;

        if decision.is_allowed() {
            return Ok(());
        }

        Err(DomainError::RateLimited {
            action: RateLimitAction::Search.to_string(),
            retry_after_secs: decision.remaining_time_secs().unwrap_or(0),
        })
    }

    async fn resolve_authors(
        &self,
        posts: &[PostSummary],
        support_requests: &[SupportRequestSummary],
    ) -> Result<HashMap<AccountId, String>> {
        let mut seen = HashSet::new();
        let author_ids: Vec<AccountId> = posts
            .iter()
            .map(PostSummary::author_id)
            .chain(support_requests.iter().map(SupportRequestSummary::author_id))
            .filter(|id| seen.insert(**id))
            .copied()
            .collect();

        if author_ids.is_empty() {
            return Ok(HashMap::new());
        }

        self.profiles.find_display_names(&author_ids).await
    }
}
