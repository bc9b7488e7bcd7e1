// crates/shared-kernel/src/infrastructure/bootstrap/telemetry.rs

use tracing_subscriber::EnvFilter;

/// Installe le subscriber `fmt` global (filtre via `RUST_LOG`, `info` par défaut).
/// Idempotent : un second appel (tests, workers multiples) est ignoré.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
    {
        tracing::debug!("Tracing subscriber installed");
    }
}
