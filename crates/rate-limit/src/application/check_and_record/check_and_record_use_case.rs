// crates/rate-limit/src/application/check_and_record/check_and_record_use_case.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::clock::Clock;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::DomainError;
use std::sync::Arc;
use std::time::Duration;

use crate::application::check_and_record::CheckAndRecordCommand;
use crate::application::ports::RateLimiter;
use crate::config::{EnforcementMode, FailurePolicy, RateLimitSettings, RemainingTimeStrategy};
use crate::domain::entities::RateLimitRecord;
use crate::domain::repositories::RateLimitRepository;
use crate::domain::value_objects::{RateLimitAction, RateLimitDecision, RateLimitPolicy};

pub struct CheckAndRecordUseCase {
    repo: Arc<dyn RateLimitRepository>,
    clock: Arc<dyn Clock>,
    settings: RateLimitSettings,
}

impl CheckAndRecordUseCase {
    pub fn new(
        repo: Arc<dyn RateLimitRepository>,
        clock: Arc<dyn Clock>,
        settings: RateLimitSettings,
    ) -> Self {
        Self { repo, clock, settings }
    }

    pub async fn execute(&self, cmd: CheckAndRecordCommand) -> RateLimitDecision {
        let policy = cmd.action.policy();
        let now = self.clock.now();
        let window_start = policy.window_start(now);

        match self.settings.enforcement() {
            EnforcementMode::Advisory => self.check_then_record(&cmd, policy, now, window_start).await,
            EnforcementMode::Atomic => self.record_atomically(&cmd, policy, now, window_start).await,
        }
    }

    /// Deux allers-retours sans transaction : deux appels concurrents peuvent
    /// tous deux voir `count < max` et dépasser la limite.
    async fn check_then_record(
        &self,
        cmd: &CheckAndRecordCommand,
        policy: RateLimitPolicy,
        now: DateTime<Utc>,
        window_start: DateTime<Utc>,
    ) -> RateLimitDecision {
        // 1. Comptage sur la fenêtre glissante
        let count = match self.repo.count_since(&cmd.account_id, cmd.action, window_start).await {
            Ok(count) => count,
            Err(err) => return self.on_backend_failure(cmd, policy, &err),
        };

        // 2. Limite atteinte
        if policy.is_exhausted_by(count) {
            return self.deny(cmd, policy, now, window_start).await;
        }

        // 3. Audit. Un échec d'écriture n'empêche pas l'action (sous-comptage accepté).
        let record = RateLimitRecord::new(cmd.account_id, cmd.action, now);
        if let Err(err) = self.repo.insert(&record).await {
            tracing::warn!(
                account_id = %cmd.account_id,
                action = %cmd.action,
                error = %err,
                "Rate limit audit record not persisted, action allowed anyway"
            );
        }

        RateLimitDecision::allowed()
    }

    async fn record_atomically(
        &self,
        cmd: &CheckAndRecordCommand,
        policy: RateLimitPolicy,
        now: DateTime<Utc>,
        window_start: DateTime<Utc>,
    ) -> RateLimitDecision {
        let record = RateLimitRecord::new(cmd.account_id, cmd.action, now);

        match self
            .repo
            .insert_if_below(&record, window_start, policy.max_requests())
            .await
        {
            Ok(true) => RateLimitDecision::allowed(),
            Ok(false) => self.deny(cmd, policy, now, window_start).await,
            Err(err) => self.on_backend_failure(cmd, policy, &err),
        }
    }

    async fn deny(
        &self,
        cmd: &CheckAndRecordCommand,
        policy: RateLimitPolicy,
        now: DateTime<Utc>,
        window_start: DateTime<Utc>,
    ) -> RateLimitDecision {
        let remaining = match self.settings.remaining_time() {
            RemainingTimeStrategy::FullWindow => policy.window(),
            RemainingTimeStrategy::UntilOldestExpires => {
                self.time_until_oldest_expires(cmd, policy, now, window_start).await
            }
        };

        tracing::info!(
            account_id = %cmd.account_id,
            action = %cmd.action,
            max = policy.max_requests(),
            retry_after_secs = remaining.as_secs(),
            "Rate limit exceeded"
        );

        RateLimitDecision::denied(remaining)
    }

    async fn time_until_oldest_expires(
        &self,
        cmd: &CheckAndRecordCommand,
        policy: RateLimitPolicy,
        now: DateTime<Utc>,
        window_start: DateTime<Utc>,
    ) -> Duration {
        match self.repo.oldest_since(&cmd.account_id, cmd.action, window_start).await {
            Ok(Some(oldest)) => (oldest + policy.window_delta() - now)
                .to_std()
                .unwrap_or(Duration::ZERO)
                .min(policy.window()),
            Ok(None) => policy.window(),
            Err(err) => {
                tracing::warn!(
                    account_id = %cmd.account_id,
                    action = %cmd.action,
                    error = %err,
                    "Oldest rate limit record unavailable, reporting full window"
                );
                policy.window()
            }
        }
    }

    fn on_backend_failure(
        &self,
        cmd: &CheckAndRecordCommand,
        policy: RateLimitPolicy,
        err: &DomainError,
    ) -> RateLimitDecision {
        match self.settings.failure_policy() {
            FailurePolicy::FailOpen => {
                tracing::error!(
                    account_id = %cmd.account_id,
                    action = %cmd.action,
                    error = %err,
                    "Rate limit check failed, failing open"
                );
                RateLimitDecision::allowed()
            }
            FailurePolicy::FailClosed => {
                tracing::error!(
                    account_id = %cmd.account_id,
                    action = %cmd.action,
                    error = %err,
                    "Rate limit check failed, failing closed"
                );
                RateLimitDecision::denied(policy.window())
            }
        }
    }
}

#[async_trait]
impl RateLimiter for CheckAndRecordUseCase {
    async fn check_and_record(&self, account_id: &AccountId, action: RateLimitAction) -> RateLimitDecision {
        self.execute(CheckAndRecordCommand {
            account_id: *account_id,
            action,
        })
        .await
    }
}
