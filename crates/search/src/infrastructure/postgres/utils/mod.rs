mod like_pattern;
mod postgres_migrations;

pub use like_pattern::contains_pattern;
pub use postgres_migrations::run_postgres_migrations;
