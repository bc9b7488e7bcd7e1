// crates/shared-kernel/src/infrastructure/postgres/factories/postgres_context.rs

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::infrastructure::postgres::factories::{PostgresConfig, PostgresContextBuilder};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub struct PostgresContext {
    pool: PgPool,
    url: String,
    config: PostgresConfig,
}

impl PostgresContext {
    /// Valeurs par défaut, sans lecture de l'environnement.
    /// Pour la configuration `COMMUNITY_DB_*`, passer par `PostgresContextBuilder::from_env`.
    pub fn builder() -> PostgresContextBuilder {
        PostgresContextBuilder::default()
    }

    pub fn pool(&self) -> PgPool {
        self.pool.clone()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn config(&self) -> PostgresConfig {
        self.config
    }

    pub(crate) async fn restore(builder: PostgresContextBuilder) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(builder.max_connections)
            .min_connections(builder.min_connections)
            .acquire_timeout(builder.connect_timeout)
            .connect(&builder.url)
            .await
            .map_err(|e| {
                AppError::new(
                    ErrorCode::InfrastructureFailure,
                    format!("Postgres Connection Failed: {}", e),
                )
            })?;

        tracing::info!(
            max_connections = builder.max_connections,
            min_connections = builder.min_connections,
            "✅ Postgres pool ready"
        );

        Ok(Self {
            pool,
            url: builder.url,
            config: PostgresConfig::new(
                builder.max_connections,
                builder.min_connections,
                builder.connect_timeout,
            ),
        })
    }
}
