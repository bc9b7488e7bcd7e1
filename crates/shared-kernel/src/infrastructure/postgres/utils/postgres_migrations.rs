// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_migrations.rs

use anyhow::Context;
use sqlx::PgPool;

/// Applique des scripts SQL embarqués (via `include_str!`) dans l'ordre fourni.
/// Les scripts doivent être idempotents (`IF NOT EXISTS`) : ils sont rejoués à chaque démarrage.
pub async fn run_migration_scripts(pool: &PgPool, scripts: &[(&str, &str)]) -> anyhow::Result<()> {
    for (name, sql) in scripts {
        sqlx::raw_sql(sql)
            .execute(pool)
            .await
            .with_context(|| format!("migration '{}' failed", name))?;

        tracing::info!(migration = %name, "✅ Postgres migration applied");
    }
    Ok(())
}
