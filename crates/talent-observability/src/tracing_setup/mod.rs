//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use talent_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "TALENT_LOG";

/// Install a JSON subscriber filtered by `TALENT_LOG`, or `info` when unset.
/// Returns false when a global subscriber was already installed.
pub fn init_tracing() -> bool {
    init_tracing_from_config(&ObservabilityConfig {
        log_level: "info".to_string(),
        json_logs: true,
    })
}

/// Initialize from configuration. `TALENT_LOG` still wins over `log_level`.
/// Returns false when a global subscriber was already installed.
pub fn init_tracing_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json_logs)
}

/// Install a JSON subscriber with an explicit filter, ignoring `TALENT_LOG`.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter), true)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
