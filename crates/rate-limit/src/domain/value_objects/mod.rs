mod rate_limit_action;
mod rate_limit_decision;
mod rate_limit_policy;

pub use rate_limit_action::RateLimitAction;
pub use rate_limit_decision::RateLimitDecision;
pub use rate_limit_policy::RateLimitPolicy;
