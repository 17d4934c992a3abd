//! Tracing setup for the batch run.

pub mod events;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use faultline_core::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding the log filter, e.g. `FAULTLINE_LOG=faultline_scoring=debug`.
pub const LOG_ENV: &str = "FAULTLINE_LOG";

/// Initialize logging with the stock configuration.
///
/// Reads `FAULTLINE_LOG`, falling back to `faultline=info`. Idempotent.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize logging, using `config.log_level` when `FAULTLINE_LOG` is
/// unset or invalid. Only the first call in a process has any effect.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    let fallback = format!("faultline={}", config.log_level);
    let json = config.json;
    INIT.call_once(move || {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&fallback));

        let registry = tracing_subscriber::registry().with(filter);
        // A subscriber installed elsewhere (e.g. by a test harness) wins.
        let _ = if json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .try_init()
        };
    });
}
