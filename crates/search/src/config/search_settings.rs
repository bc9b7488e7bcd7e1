// crates/search/src/config/search_settings.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    fetch_limit: i64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            fetch_limit: Self::DEFAULT_FETCH_LIMIT,
        }
    }
}

impl SearchSettings {
    pub const FETCH_LIMIT_VAR: &'static str = "SEARCH_FETCH_LIMIT";
    pub const DEFAULT_FETCH_LIMIT: i64 = 50;

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Limite absente, non numérique ou <= 0 -> défaut (avec warning dans les deux derniers cas).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch_limit = match lookup(Self::FETCH_LIMIT_VAR) {
            None => Self::DEFAULT_FETCH_LIMIT,
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    tracing::warn!(
                        var = Self::FETCH_LIMIT_VAR,
                        value = %raw,
                        "⚠️ Fetch limit must be a positive integer, using default"
                    );
                    Self::DEFAULT_FETCH_LIMIT
                }
            },
        };

        Self { fetch_limit }
    }

    /// Ignoré si <= 0
    pub fn with_fetch_limit(mut self, limit: i64) -> Self {
        if limit > 0 {
            self.fetch_limit = limit;
        }
        self
    }

    pub fn fetch_limit(&self) -> i64 {
        self.fetch_limit
    }
}
