// crates/search/src/application/search_community/search_results.rs

use serde::Serialize;

use crate::domain::entities::{PostSummary, ScoredProfile, SupportRequestSummary};
use crate::domain::value_objects::SearchTicket;

/// Publication accompagnée du nom de son auteur (absent si le profil a disparu).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostHit {
    #[serde(flatten)]
    pub post: PostSummary,
    pub author_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupportRequestHit {
    #[serde(flatten)]
    pub request: SupportRequestSummary,
    pub author_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub ticket: SearchTicket,
    pub profiles: Vec<ScoredProfile>,
    pub posts: Vec<PostHit>,
    pub support_requests: Vec<SupportRequestHit>,
}

impl SearchResults {
    pub fn empty(ticket: SearchTicket) -> Self {
        Self {
            ticket,
            profiles: vec![],
            posts: vec![],
            support_requests: vec![],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty() && self.posts.is_empty() && self.support_requests.is_empty()
    }
}
