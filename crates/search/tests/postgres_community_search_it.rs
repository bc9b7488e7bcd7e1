// crates/search/tests/postgres_community_search_it.rs

mod common;

use rate_limit::application::check_and_record::CheckAndRecordUseCase;
use rate_limit::config::RateLimitSettings;
use rate_limit::infrastructure::postgres::repositories::PostgresRateLimitRepository;
use search::application::search_community::{SearchCommunityCommand, SearchCommunityUseCase};
use search::config::SearchSettings;
use search::domain::repositories::{PostSearchRepository, ProfileSearchRepository};
use search::domain::value_objects::SearchQuery;
use search::infrastructure::postgres::repositories::{
    PostgresPostSearchRepository, PostgresProfileSearchRepository,
    PostgresSupportRequestSearchRepository,
};
use search::infrastructure::postgres::utils::run_postgres_migrations;
use shared_kernel::clock::SystemClock;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::DomainError;
use sqlx::PgPool;
use std::sync::Arc;

use common::{insert_post, insert_profile, insert_support_request, setup_postgres_test_db, ProfileSeed};

fn build_use_case(pool: PgPool) -> SearchCommunityUseCase {
    let limiter = CheckAndRecordUseCase::new(
        Arc::new(PostgresRateLimitRepository::new(pool.clone())),
        Arc::new(SystemClock),
        RateLimitSettings::default(),
    );

    SearchCommunityUseCase::new(
        Arc::new(PostgresProfileSearchRepository::new(pool.clone())),
        Arc::new(PostgresPostSearchRepository::new(pool.clone())),
        Arc::new(PostgresSupportRequestSearchRepository::new(pool)),
        Arc::new(limiter),
        SearchSettings::default(),
    )
}

fn cmd(account_id: AccountId, query: &str) -> SearchCommunityCommand {
    SearchCommunityCommand {
        account_id,
        query: query.to_string(),
        location: None,
        categories: vec![],
    }
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_end_to_end_search_ranks_and_resolves_authors() {
    let ctx = setup_postgres_test_db().await;
    let pool = ctx.pool();

    let gardener = insert_profile(
        &pool,
        ProfileSeed {
            location: Some(r#"{"address":"Boston, MA","latitude":42.36,"longitude":-71.06}"#),
            expertise: &["Gardening", "Composting"],
            ..ProfileSeed::named("Rosa Garden")
        },
    )
    .await;
    insert_profile(
        &pool,
        ProfileSeed {
            bio: Some("Weekend gardening enthusiast"),
            location: Some("Cambridge"),
            ..ProfileSeed::named("Tom")
        },
    )
    .await;
    insert_profile(&pool, ProfileSeed::named("Unrelated Person")).await;
    insert_post(&pool, gardener, "Gardening tips for spring").await;
    insert_support_request(&pool, gardener, "Need help gardening", Some("Gardening")).await;

    let use_case = build_use_case(pool.clone());

    let results = use_case
        .execute(cmd(AccountId::new(), "garden"))
        .await
        .unwrap()
        .unwrap();

    let names: Vec<&str> = results.profiles.iter().map(|p| p.profile.display_name()).collect();
    // Rosa : nom partiel (50) + expertise (30) ; Tom : bio (15)
    assert_eq!(names, vec!["Rosa Garden", "Tom"]);
    assert_eq!(results.profiles[0].score, 80);
    assert_eq!(results.profiles[0].profile.location().address(), "Boston, MA");

    assert_eq!(results.posts.len(), 1);
    assert_eq!(results.posts[0].author_name.as_deref(), Some("Rosa Garden"));
    assert_eq!(results.support_requests.len(), 1);
    assert_eq!(results.support_requests[0].author_name.as_deref(), Some("Rosa Garden"));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_domains_are_aggregated_and_matched() {
    let ctx = setup_postgres_test_db().await;
    let pool = ctx.pool();

    insert_profile(
        &pool,
        ProfileSeed {
            domains: &["Plumbing", "Carpentry"],
            ..ProfileSeed::named("Mario")
        },
    )
    .await;

    let repo = PostgresProfileSearchRepository::new(pool);
    let profiles = repo
        .search_profiles(&SearchQuery::try_new("carp").unwrap(), 50)
        .await
        .unwrap();

    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].domains(), &["Carpentry".to_string(), "Plumbing".to_string()]);
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_like_wildcards_in_query_are_literal() {
    let ctx = setup_postgres_test_db().await;
    let pool = ctx.pool();
    let author = insert_profile(&pool, ProfileSeed::named("Shop")).await;
    insert_post(&pool, author, "Everything 50% off").await;
    insert_post(&pool, author, "Everything 500 off").await;

    let repo = PostgresPostSearchRepository::new(pool);
    let posts = repo
        .search_posts(&SearchQuery::try_new("50%").unwrap(), 50)
        .await
        .unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].content(), "Everything 50% off");
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_search_is_rate_limited_after_a_hundred_calls() {
    let ctx = setup_postgres_test_db().await;
    let use_case = build_use_case(ctx.pool());
    let account_id = AccountId::new();

    for _ in 0..100 {
        use_case.execute(cmd(account_id, "anything")).await.unwrap();
    }
    let err = use_case.execute(cmd(account_id, "anything")).await.unwrap_err();

    assert!(matches!(err, DomainError::RateLimited { retry_after_secs: 60, .. }));
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_migrations_are_idempotent() {
    let ctx = setup_postgres_test_db().await;

    run_postgres_migrations(&ctx.pool()).await.unwrap();
    run_postgres_migrations(&ctx.pool()).await.unwrap();
}
