//! Backend connection settings.
//!
//! Values come from the environment and can be overridden by the binary's
//! command-line flags.

use std::env;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "TASK_DETAIL_BACKEND_URL";

/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_SECS_ENV: &str = "TASK_DETAIL_TIMEOUT_SECS";

/// Base URL used when none is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:4646";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors returned while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL does not use an HTTP scheme.
    #[error("backend URL '{0}' must start with 'http://' or 'https://'")]
    InvalidBackendUrl(String),

    /// The timeout is not a positive whole number of seconds.
    #[error("invalid timeout '{0}', expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Connection settings for the orchestrator backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
    timeout: Duration,
}

impl BackendConfig {
    /// Creates a configuration from explicit values.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Loads configuration from [`BACKEND_URL_ENV`] and [`TIMEOUT_SECS_ENV`],
    /// falling back to the defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(BACKEND_URL_ENV).ok();
        let timeout = env::var(TIMEOUT_SECS_ENV).ok();
        Self::from_values(base_url.as_deref(), timeout.as_deref())
    }

    /// Builds configuration from optional raw values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a provided value is invalid.
    pub fn from_values(
        base_url: Option<&str>,
        timeout_secs: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let url = base_url.map_or(DEFAULT_BACKEND_URL, str::trim);
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl(url.to_owned()));
        }

        let timeout = match timeout_secs {
            None => DEFAULT_TIMEOUT,
            Some(raw) => parse_timeout(raw)?,
        };
        Ok(Self::new(url, timeout))
    }

    /// Returns the backend base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT)
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_owned())),
    }
}
