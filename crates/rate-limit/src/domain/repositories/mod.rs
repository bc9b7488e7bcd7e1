mod rate_limit_repository;
mod rate_limit_repository_stub;

pub use rate_limit_repository::RateLimitRepository;
pub use rate_limit_repository_stub::RateLimitRepositoryStub;
