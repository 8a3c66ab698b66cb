//! Tracing and logging setup shared by binaries and tests.

pub mod config;
pub mod error;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};
pub use error::{ObservabilityError, ObservabilityResult};

/// Initialize process-wide observability (tracing/logging) from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
