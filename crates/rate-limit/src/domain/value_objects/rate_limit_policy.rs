// crates/rate-limit/src/domain/value_objects/rate_limit_policy.rs

use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    max_requests: u32,
    window_secs: u64,
}

impl RateLimitPolicy {
    pub const fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
        }
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }

    pub fn window_delta(&self) -> TimeDelta {
        TimeDelta::seconds(self.window_secs as i64)
    }

    /// Début de la fenêtre glissante (inclusif)
    pub fn window_start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.window_delta()
    }

    pub fn is_exhausted_by(&self, count: u64) -> bool {
        count >= u64::from(self.max_requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_window_start_is_now_minus_window() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();
        let policy = RateLimitPolicy::new(5, 300);

        assert_eq!(
            policy.window_start(now),
            Utc.with_ymd_and_hms(2026, 3, 1, 9, 55, 0).unwrap()
        );
    }

    #[test]
    fn test_exhaustion_boundary() {
        let policy = RateLimitPolicy::new(3, 60);
        assert!(!policy.is_exhausted_by(2));
        assert!(policy.is_exhausted_by(3));
        assert!(policy.is_exhausted_by(4));
    }
}
