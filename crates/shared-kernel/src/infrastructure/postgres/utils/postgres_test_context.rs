// crates/shared-kernel/src/infrastructure/postgres/utils/postgres_test_context.rs

use crate::infrastructure::postgres::factories::PostgresContext;
use crate::infrastructure::postgres::utils::PostgresTestContextBuilder;
use sqlx::migrate::Migrator;
use sqlx::PgPool;
use std::path::Path;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres as PostgresImage;

/// Postgres jetable (testcontainers) + pool prête à l'emploi.
/// Le container vit aussi longtemps que le contexte.
pub struct PostgresTestContext {
    context: PostgresContext,
    _container: ContainerAsync<PostgresImage>,
}

impl PostgresTestContext {
    pub fn builder() -> PostgresTestContextBuilder {
        PostgresTestContextBuilder::new()
    }

    pub(crate) async fn restore(builder: PostgresTestContextBuilder) -> Self {
        // 1. Démarrage container
        let container = PostgresImage::default()
            .with_user(&builder.user)
            .with_password(&builder.password)
            .with_db_name(&builder.db_name)
            .with_name(&builder.image_name)
            .with_tag(&builder.image_tag)
            .start()
            .await
            .expect("Failed to start Postgres container");

        let host_port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Postgres port not exposed");
        let conn_str = format!(
            "postgres://{}:{}@127.0.0.1:{}/{}",
            builder.user, builder.password, host_port, builder.db_name
        );

        // 2. Pool
        let mut context_builder = PostgresContext::builder().with_url(&conn_str);
        if let Some(cfg) = builder.config {
            context_builder = context_builder
                .with_max_connections(cfg.max_connections)
                .with_min_connections(cfg.min_connections)
                .with_timeout(cfg.connect_timeout);
        }
        let context = context_builder
            .build()
            .await
            .expect("Failed to build context");

        // 3. Migrations du module
        for path in &builder.migrations {
            if !Path::new(path).exists() {
                tracing::warn!(path = %path, "⚠️ Migration path not found, skipping");
                continue;
            }
            let mut migrator = Migrator::new(Path::new(path))
                .await
                .expect("Invalid migration path");
            // Plusieurs dossiers partagent la table _sqlx_migrations
            migrator.set_ignore_missing(true);
            migrator
                .run(&context.pool())
                .await
                .expect("Failed to apply migrations");
        }

        Self {
            context,
            _container: container,
        }
    }

    pub fn pool(&self) -> PgPool {
        self.context.pool()
    }

    pub fn url(&self) -> &str {
        self.context.url()
    }
}
