mod post_summary;
mod scored_profile;
mod searchable_profile;
mod support_request_summary;

pub use post_summary::PostSummary;
pub use scored_profile::ScoredProfile;
pub use searchable_profile::SearchableProfile;
pub use support_request_summary::SupportRequestSummary;
