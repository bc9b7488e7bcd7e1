// crates/rate-limit/src/domain/value_objects/rate_limit_decision.rs

use serde::Serialize;
use std::time::Duration;

/// Verdict renvoyé à l'appelant avant une action sensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimitDecision {
    allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    remaining_time_secs: Option<u64>,
}

impl RateLimitDecision {
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            remaining_time_secs: None,
        }
    }

    /// Arrondi à la seconde supérieure : un client qui attend `remaining_time` ne doit pas être refusé.
    pub fn denied(remaining: Duration) -> Self {
        let mut secs = remaining.as_secs();
        if remaining.subsec_nanos() > 0 {
            secs += 1;
        }
        Self {
            allowed: false,
            remaining_time_secs: Some(secs),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn remaining_time(&self) -> Option<Duration> {
        self.remaining_time_secs.map(Duration::from_secs)
    }

    pub fn remaining_time_secs(&self) -> Option<u64> {
        self.remaining_time_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denied_rounds_up() {
        let d = RateLimitDecision::denied(Duration::from_millis(59_001));
        assert!(!d.is_allowed());
        assert_eq!(d.remaining_time_secs(), Some(60));
    }

    #[test]
    fn test_allowed_serializes_without_remaining_time() {
        let json = serde_json::to_value(RateLimitDecision::allowed()).unwrap();
        assert_eq!(json, serde_json::json!({ "allowed": true }));
    }
}
