mod community_search_repository_stub;
mod post_search_repository;
mod profile_search_repository;
mod support_request_search_repository;

pub use community_search_repository_stub::CommunitySearchRepositoryStub;
pub use post_search_repository::PostSearchRepository;
pub use profile_search_repository::ProfileSearchRepository;
pub use support_request_search_repository::SupportRequestSearchRepository;
