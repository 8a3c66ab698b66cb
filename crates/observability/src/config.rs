//! Logging configuration.

use core::str::FromStr;
use serde::Deserialize;

use crate::error::{ObservabilityError, ObservabilityResult};

/// Output format of the `fmt` subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            other => Err(ObservabilityError::unknown_format(other)),
        }
    }
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive, e.g. `info` or `valueobject_core=trace`.
    pub filter: String,
    pub format: LogFormat,
    pub with_target: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
            with_target: false,
        }
    }
}

impl ObservabilityConfig {
    /// Environment variable holding the filter directive.
    pub const FILTER_ENV: &'static str = "RUST_LOG";
    /// Environment variable selecting the log format.
    pub const FORMAT_ENV: &'static str = "VALUEOBJECT_LOG_FORMAT";

    /// Read the configuration from the process environment, falling back to defaults.
    pub fn from_env() -> ObservabilityResult<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Like [`ObservabilityConfig::from_env`], but an unknown format falls back to
    /// [`LogFormat::default`] while the filter is kept.
    pub fn from_env_or_default() -> Self {
        Self::from_vars_or_default(|key| std::env::var(key).ok())
    }

    /// Same as [`ObservabilityConfig::from_env`], with a caller-supplied variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> ObservabilityResult<Self> {
        let mut config = Self::with_filter_from(&lookup);
        if let Some(format) = lookup(Self::FORMAT_ENV) {
            config.format = format.parse()?;
        }
        Ok(config)
    }

    /// Same as [`ObservabilityConfig::from_env_or_default`], with a caller-supplied lookup.
    pub fn from_vars_or_default(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::with_filter_from(&lookup);
        if let Some(format) = lookup(Self::FORMAT_ENV) {
            config.format = format.parse().unwrap_or_default();
        }
        config
    }

    fn with_filter_from(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(filter) = lookup(Self::FILTER_ENV).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }
        config
    }
}
