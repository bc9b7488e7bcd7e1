// crates/rate-limit/src/application/ports/rate_limiter.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::AccountId;
use std::sync::Mutex;

use crate::domain::value_objects::{RateLimitAction, RateLimitDecision};

/// Garde consultée avant toute action sensible (messagerie, recherche, upload...).
/// Ne renvoie jamais d'erreur : les pannes backend sont absorbées selon la `FailurePolicy`.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    async fn check_and_record(&self, account_id: &AccountId, action: RateLimitAction) -> RateLimitDecision;
}

// --- STUB RATE LIMITER ---
pub struct RateLimiterStub {
    pub decision: Mutex<RateLimitDecision>,
    pub calls: Mutex<Vec<(AccountId, RateLimitAction)>>,
}

impl Default for RateLimiterStub {
    fn default() -> Self {
        Self {
            decision: Mutex::new(RateLimitDecision::allowed()),
            calls: Mutex::new(vec![]),
        }
    }
}

impl RateLimiterStub {
    pub fn denying(decision: RateLimitDecision) -> Self {
        Self {
            decision: Mutex::new(decision),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RateLimiter for RateLimiterStub {
    async fn check_and_record(&self, account_id: &AccountId, action: RateLimitAction) -> RateLimitDecision {
        self.calls.lock().unwrap().push((*account_id, action));
        *self.decision.lock().unwrap()
    }
}
