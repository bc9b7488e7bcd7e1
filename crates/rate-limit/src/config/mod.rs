mod rate_limit_settings;

pub use rate_limit_settings::{EnforcementMode, FailurePolicy, RateLimitSettings, RemainingTimeStrategy};
