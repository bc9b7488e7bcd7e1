mod postgres_migrations;

pub use postgres_migrations::run_postgres_migrations;
