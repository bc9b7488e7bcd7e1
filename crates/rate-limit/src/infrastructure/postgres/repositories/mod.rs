mod postgres_rate_limit_repository;

pub use postgres_rate_limit_repository::PostgresRateLimitRepository;
