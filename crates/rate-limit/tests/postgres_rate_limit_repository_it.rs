// crates/rate-limit/tests/postgres_rate_limit_repository_it.rs

mod common;

use chrono::{TimeDelta, Utc};
use rate_limit::application::check_and_record::{CheckAndRecordCommand, CheckAndRecordUseCase};
use rate_limit::config::{EnforcementMode, RateLimitSettings};
use rate_limit::domain::entities::RateLimitRecord;
use rate_limit::domain::repositories::RateLimitRepository;
use rate_limit::domain::value_objects::RateLimitAction;
use rate_limit::infrastructure::postgres::repositories::PostgresRateLimitRepository;
use rate_limit::infrastructure::postgres::utils::run_postgres_migrations;
use shared_kernel::clock::SystemClock;
use shared_kernel::domain::value_objects::AccountId;
use std::sync::Arc;

use common::setup_postgres_test_db;

#[tokio::test]
#[ignore = "requires docker"]
async fn test_count_and_oldest_follow_the_window() {
    let ctx = setup_postgres_test_db().await;
    let repo = PostgresRateLimitRepository::new(ctx.pool());

    let account_id = AccountId::new();
    let now = Utc::now();
    let old = RateLimitRecord::new(account_id, RateLimitAction::Message, now - TimeDelta::seconds(90));
    let recent = RateLimitRecord::new(account_id, RateLimitAction::Message, now - TimeDelta::seconds(30));
    let other_action = RateLimitRecord::new(account_id, RateLimitAction::Search, now);

    repo.insert(&old).await.unwrap();
    repo.insert(&recent).await.unwrap();
    repo.insert(&other_action).await.unwrap();

    let window_start = now - TimeDelta::seconds(60);
    assert_eq!(repo.count_since(&account_id, RateLimitAction::Message, window_start).await.unwrap(), 1);

    let oldest = repo
        .oldest_since(&account_id, RateLimitAction::Message, now - TimeDelta::seconds(120))
        .await
        .unwrap()
        .unwrap();
    // Postgres tronque à la microseconde
    assert!((oldest - old.created_at()).num_milliseconds().abs() < 1);

    assert!(repo
        .oldest_since(&AccountId::new(), RateLimitAction::Message, window_start)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_migrations_are_idempotent() {
    let ctx = setup_postgres_test_db().await;

    run_postgres_migrations(&ctx.pool()).await.unwrap();
    run_postgres_migrations(&ctx.pool()).await.unwrap();
}

#[tokio::test]
#[ignore = "requires docker"]
async fn test_atomic_enforcement_holds_under_concurrency() {
    let ctx = setup_postgres_test_db().await;
    let repo = Arc::new(PostgresRateLimitRepository::new(ctx.pool()));
    let use_case = Arc::new(CheckAndRecordUseCase::new(
        repo.clone(),
        Arc::new(SystemClock),
        RateLimitSettings::default().with_enforcement(EnforcementMode::Atomic),
    ));
    let account_id = AccountId::new();

    let handles: Vec<_> = (0..25)
        .map(|_| {
            let uc = use_case.clone();
            tokio::spawn(async move {
                uc.execute(CheckAndRecordCommand {
                    account_id,
                    action: RateLimitAction::BlockReport,
                })
                .await
            })
        })
        .collect();

    let mut allowed = 0;
    for h in handles {
        if h.await.unwrap().is_allowed() {
            allowed += 1;
        }
    }

    assert_eq!(allowed, 20);
    let stored = repo
        .count_since(&account_id, RateLimitAction::BlockReport, Utc::now() - TimeDelta::seconds(3600))
        .await
        .unwrap();
    assert_eq!(stored, 20);
}
