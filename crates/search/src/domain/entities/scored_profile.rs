// crates/search/src/domain/entities/scored_profile.rs

use serde::Serialize;

use crate::domain::entities::SearchableProfile;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProfile {
    #[serde(flatten)]
    pub profile: SearchableProfile,
    pub score: i64,
}

impl ScoredProfile {
    pub fn new(profile: SearchableProfile, score: i64) -> Self {
        Self { profile, score }
    }
}
