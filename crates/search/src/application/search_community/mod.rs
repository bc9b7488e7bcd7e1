mod search_community_command;
mod search_community_use_case;
mod search_results;


pub use search_community_command::SearchCommunityCommand;
pub use search_community_use_case::SearchCommunityUseCase;
pub use search_results::{PostHit, SearchResults, SupportRequestHit};
