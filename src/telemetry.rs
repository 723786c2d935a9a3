// src/telemetry.rs
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,kingdom_listings=debug";

/// Installs the global fmt subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(true)
        .init();
}
