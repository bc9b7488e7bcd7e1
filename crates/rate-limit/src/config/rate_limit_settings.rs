// crates/rate-limit/src/config/rate_limit_settings.rs

use std::str::FromStr;

/// Comportement quand le backend ne répond pas au comptage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    #[default]
    FailOpen,
    FailClosed,
}

/// Calcul du `remaining_time` renvoyé lors d'un refus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemainingTimeStrategy {
    /// Toujours la longueur complète de la fenêtre
    #[default]
    FullWindow,
    /// Temps restant avant expiration du plus ancien enregistrement de la fenêtre
    UntilOldestExpires,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnforcementMode {
    /// count puis insert, dépassement possible sous concurrence
    #[default]
    Advisory,
    /// check-and-insert sérialisé côté backend
    Atomic,
}

impl FromStr for FailurePolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" | "fail_open" => Ok(Self::FailOpen),
            "closed" | "fail_closed" => Ok(Self::FailClosed),
            other => Err(format!("unknown failure policy '{}'", other)),
        }
    }
}

impl FromStr for RemainingTimeStrategy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "window" | "full_window" => Ok(Self::FullWindow),
            "precise" => Ok(Self::UntilOldestExpires),
            other => Err(format!("unknown remaining time strategy '{}'", other)),
        }
    }
}

impl FromStr for EnforcementMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "advisory" => Ok(Self::Advisory),
            "atomic" => Ok(Self::Atomic),
            other => Err(format!("unknown enforcement mode '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RateLimitSettings {
    failure_policy: FailurePolicy,
    remaining_time: RemainingTimeStrategy,
    enforcement: EnforcementMode,
}

impl RateLimitSettings {
    pub const FAILURE_POLICY_VAR: &'static str = "RATE_LIMIT_FAILURE_POLICY";
    pub const REMAINING_TIME_VAR: &'static str = "RATE_LIMIT_REMAINING_TIME";
    pub const ENFORCEMENT_VAR: &'static str = "RATE_LIMIT_ENFORCEMENT";

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Valeur absente -> défaut ; valeur invalide -> défaut + warning (jamais fatal au démarrage).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            failure_policy: parse_or_default(&lookup, Self::FAILURE_POLICY_VAR),
            remaining_time: parse_or_default(&lookup, Self::REMAINING_TIME_VAR),
            enforcement: parse_or_default(&lookup, Self::ENFORCEMENT_VAR),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_remaining_time(mut self, strategy: RemainingTimeStrategy) -> Self {
        self.remaining_time = strategy;
        self
    }

    pub fn with_enforcement(mut self, mode: EnforcementMode) -> Self {
        self.enforcement = mode;
        self
    }

    pub fn failure_policy(&self) -> FailurePolicy { self.failure_policy }
    pub fn remaining_time(&self) -> RemainingTimeStrategy { self.remaining_time }
    pub fn enforcement(&self) -> EnforcementMode { self.enforcement }
}

fn parse_or_default<T, F>(lookup: &F, key: &str) -> T
where
    T: FromStr<Err = String> + Default,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => T::default(),
        Some(raw) => raw.parse().unwrap_or_else(|e: String| {
            tracing::warn!(var = key, value = %raw, "⚠️ {}, using default", e);
            T::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_preserve_legacy_behavior() {
        let settings = RateLimitSettings::from_lookup(lookup(&[]));

        assert_eq!(settings.failure_policy(), FailurePolicy::FailOpen);
        assert_eq!(settings.remaining_time(), RemainingTimeStrategy::FullWindow);
        assert_eq!(settings.enforcement(), EnforcementMode::Advisory);
    }

    #[test]
    fn test_values_are_read_case_insensitively() {
        let settings = RateLimitSettings::from_lookup(lookup(&[
            ("RATE_LIMIT_FAILURE_POLICY", "Closed"),
            ("RATE_LIMIT_REMAINING_TIME", "precise"),
            ("RATE_LIMIT_ENFORCEMENT", "ATOMIC"),
        ]));

        assert_eq!(settings.failure_policy(), FailurePolicy::FailClosed);
        assert_eq!(settings.remaining_time(), RemainingTimeStrategy::UntilOldestExpires);
        assert_eq!(settings.enforcement(), EnforcementMode::Atomic);
    }

    #[test]
    fn test_invalid_value_falls_back_to_default() {
        let settings = RateLimitSettings::from_lookup(lookup(&[("RATE_LIMIT_FAILURE_POLICY", "maybe")]));
        assert_eq!(settings.failure_policy(), FailurePolicy::FailOpen);
    }
}
