//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};
use crate::error::{ObservabilityError, ObservabilityResult};

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops). An unknown log format falls
/// back to the default format; an unparsable filter falls back to the default config.
pub fn init() {
    let config = ObservabilityConfig::from_env_or_default();
    if init_with(&config).is_err() {
        let _ = init_with(&ObservabilityConfig::default());
    }
}

/// Install the global `fmt` subscriber described by `config`.
///
/// Returns an error only for an unparsable filter. If a global subscriber is already set,
/// the call is a no-op.
pub fn init_with(config: &ObservabilityConfig) -> ObservabilityResult<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .map_err(|e| ObservabilityError::invalid_filter(&config.filter, e))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(config.with_target);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    if installed.is_ok() {
        tracing::debug!(format = ?config.format, filter = %config.filter, "tracing initialized");
    }
    Ok(())
}
