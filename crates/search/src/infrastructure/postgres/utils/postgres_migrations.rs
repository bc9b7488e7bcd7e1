// crates/search/src/infrastructure/postgres/utils/postgres_migrations.rs

use shared_kernel::infrastructure::postgres::utils::run_migration_scripts;

pub async fn run_postgres_migrations(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    run_migration_scripts(
        pool,
        &[(
            "202610020000_community_search",
            include_str!("../../../../migrations/postgres/202610020000_community_search.sql"),
        )],
    )
    .await
}
