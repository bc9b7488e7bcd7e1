// crates/rate-limit/tests/common/mod.rs

use shared_kernel::infrastructure::bootstrap::init_tracing;
use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;

pub async fn setup_postgres_test_db() -> PostgresTestContext {
    init_tracing();
    PostgresTestContext::builder()
        .with_migrations(&["./migrations/postgres"])
        .build()
        .await
}
