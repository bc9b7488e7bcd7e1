mod postgres_post_search_repository;
mod postgres_profile_search_repository;
mod postgres_support_request_search_repository;

pub use postgres_post_search_repository::PostgresPostSearchRepository;
pub use postgres_profile_search_repository::PostgresProfileSearchRepository;
pub use postgres_support_request_search_repository::PostgresSupportRequestSearchRepository;
