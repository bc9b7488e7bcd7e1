// crates/search/tests/common/mod.rs

use shared_kernel::infrastructure::bootstrap::init_tracing;
use shared_kernel::infrastructure::postgres::utils::PostgresTestContext;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn setup_postgres_test_db() -> PostgresTestContext {
    init_tracing();
    PostgresTestContext::builder()
        .with_migrations(&["./migrations/postgres", "../rate-limit/migrations/postgres"])
        .build()
        .await
}

pub struct ProfileSeed<'a> {
    pub full_name: &'a str,
    pub bio: Option<&'a str>,
    pub location: Option<&'a str>,
    pub expertise: &'a [&'a str],
    pub hobbies: &'a [&'a str],
    pub domains: &'a [&'a str],
}

impl<'a> ProfileSeed<'a> {
    pub fn named(full_name: &'a str) -> Self {
        Self {
            full_name,
            bio: None,
            location: None,
            expertise: &[],
            hobbies: &[],
            domains: &[],
        }
    }
}

pub async fn insert_profile(pool: &PgPool, seed: ProfileSeed<'_>) -> Uuid {
    let id = Uuid::now_v7();
    let to_vec = |tags: &[&str]| tags.iter().map(|t| t.to_string()).collect::<Vec<String>>();

    sqlx::query(
        "INSERT INTO profiles (id, full_name, bio, location, expertise, hobbies) VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(id)
    .bind(seed.full_name)
    .bind(seed.bio)
    .bind(seed.location)
    .bind(to_vec(seed.expertise))
    .bind(to_vec(seed.hobbies))
    .execute(pool)
    .await
    .unwrap();

    for name in seed.domains {
        let domain_id: Uuid = sqlx::query_scalar(
            "INSERT INTO domains (id, name) VALUES ($1, $2)
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
             RETURNING id",
        )
        .bind(Uuid::now_v7())
        .bind(*name)
        .fetch_one(pool)
        .await
        .unwrap();

        sqlx::query("INSERT INTO profile_domains (profile_id, domain_id) VALUES ($1, $2)")
            .bind(id)
            .bind(domain_id)
            .execute(pool)
            .await
            .unwrap();
    }

    id
}

pub async fn insert_post(pool: &PgPool, author_id: Uuid, content: &str) -> Uuid {
    let id = Uuid::now_v7();
    sqlx::query("INSERT INTO posts (id, author_id, content) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(author_id)
        .bind(content)
        .execute(pool)
        .await
        .unwrap();
    id
}

pub async fn insert_support_request(pool: &PgPool, author_id: Uuid, title: &str, category: Option<&str>) -> Uuid {
    let id = Uuid::now_v7();
    sqlx::query("INSERT INTO support_requests (id, author_id, title, category) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(author_id)
        .bind(title)
        .bind(category)
        .execute(pool)
        .await
        .unwrap();
    id
}
