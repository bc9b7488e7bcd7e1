// crates/shared-kernel/src/clock/mod.rs

use chrono::{DateTime, Utc};

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

/// Source de temps injectée dans les use cases.
/// Les fenêtres de rate limiting et les timestamps d'audit passent tous par ici.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
